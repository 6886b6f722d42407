//! Load-time music playback.
//!
//! The shell plays one fixed music asset when the page loads. Autoplay may
//! be blocked by browser policy; that is logged and ignored - music is
//! cosmetic, the game runs without it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

use crate::settings::Settings;

/// Handle to the background music element.
#[cfg(target_arch = "wasm32")]
pub struct MusicPlayer {
    element: Option<HtmlAudioElement>,
}

#[cfg(target_arch = "wasm32")]
impl MusicPlayer {
    /// Create the audio element and start playback once, per settings.
    pub fn start(src: &str, settings: &Settings) -> Self {
        if !settings.music {
            log::info!("Music disabled in settings");
            return Self { element: None };
        }

        let volume = settings.music_volume.clamp(0.0, 1.0) as f64;
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(el) => el,
            Err(err) => {
                log::warn!("Failed to create audio element: {err:?}");
                return Self { element: None };
            }
        };
        element.set_volume(volume);

        match element.play() {
            Ok(promise) => {
                // Autoplay rejection surfaces through the promise; log it
                // without taking the page down.
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("Music playback blocked: {err:?}");
                    }
                });
            }
            Err(err) => log::warn!("Music playback failed to start: {err:?}"),
        }

        Self {
            element: Some(element),
        }
    }

    /// Mute without pausing; playback position keeps advancing.
    pub fn set_muted(&self, muted: bool) {
        if let Some(ref el) = self.element {
            el.set_muted(muted);
            log::info!("Music {}", if muted { "muted" } else { "unmuted" });
        }
    }
}

/// Native stub; there is no audio output outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub struct MusicPlayer;

#[cfg(not(target_arch = "wasm32"))]
impl MusicPlayer {
    pub fn start(_src: &str, _settings: &Settings) -> Self {
        Self
    }

    pub fn set_muted(&self, _muted: bool) {}
}
