use shared::{AboutContent, HeroContent, SiteInfo};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Page copy and site settings. Each part starts at its default and is
/// replaced independently as its request completes.
#[derive(Clone, PartialEq)]
pub struct SiteContentState {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub site: SiteInfo,
}

pub struct UseSiteContentResult {
    pub state: SiteContentState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_site_content(api_client: &ApiClient) -> UseSiteContentResult {
    let hero = use_state(HeroContent::default);
    let about = use_state(AboutContent::default);
    let site = use_state(SiteInfo::default);

    let refresh = {
        let api_client = api_client.clone();
        let hero = hero.clone();
        let about = about.clone();
        let site = site.clone();

        use_callback((), move |_, _| {
            {
                let api_client = api_client.clone();
                let hero = hero.clone();
                spawn_local(async move {
                    match api_client.get_hero().await {
                        Ok(content) => hero.set(content),
                        Err(e) => Logger::error_with_component("use_site_content", &format!("Failed to fetch hero: {}", e)),
                    }
                });
            }
            {
                let api_client = api_client.clone();
                let about = about.clone();
                spawn_local(async move {
                    match api_client.get_about().await {
                        Ok(content) => about.set(content),
                        Err(e) => Logger::error_with_component("use_site_content", &format!("Failed to fetch about: {}", e)),
                    }
                });
            }
            {
                let api_client = api_client.clone();
                let site = site.clone();
                spawn_local(async move {
                    match api_client.site_info().await {
                        Ok(info) => site.set(info),
                        Err(e) => Logger::warn_with_component("use_site_content", &format!("Failed to fetch site info: {}", e)),
                    }
                });
            }
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseSiteContentResult {
        state: SiteContentState {
            hero: (*hero).clone(),
            about: (*about).clone(),
            site: (*site).clone(),
        },
        refresh,
    }
}
