#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use aniepick_engine::ClientSettings;
use serde_json::{json, Value};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(aniepick_logging::initialize_for_tests);
}

/// Client settings pointed at a mock server, without the courtesy delay.
pub fn settings_for(base_url: &str) -> ClientSettings {
    ClientSettings {
        base_url: base_url.to_string(),
        request_delay: Duration::ZERO,
        ..ClientSettings::default()
    }
}

pub fn anime_json(id: u32) -> Value {
    json!({
        "mal_id": id,
        "title": format!("Anime {id}"),
        "title_english": null,
        "synopsis": "Somebody goes somewhere.",
        "score": 8.1,
        "type": "TV",
        "episodes": 24,
        "year": 2019,
        "genres": [{ "mal_id": 1, "name": "Action", "type": "anime" }],
        "images": { "jpg": { "large_image_url": format!("https://cdn.example.com/{id}.jpg") } }
    })
}

pub fn incomplete_anime_json(id: u32) -> Value {
    json!({
        "mal_id": id,
        "title": format!("Anime {id}"),
        "synopsis": null,
        "images": { "jpg": { "large_image_url": null } }
    })
}

pub fn page_json(items: Vec<Value>) -> Value {
    json!({ "pagination": { "has_next_page": true }, "data": items })
}
