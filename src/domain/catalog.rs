// src/domain/catalog.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Nightly rate of the single-room page, also used when a room id can't be
/// resolved.
pub const DEFAULT_RATE: i64 = 5500;

/// Highest nightly rate a catalog may carry.
pub const MAX_RATE: i64 = 100_000_000;

/// One selectable room type. Prices are whole rubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub id: String,
    pub display_name: String,
    pub price_per_night: i64,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
}

/// Rooms on offer plus the fallback rate. A catalog with no rooms is the
/// flat-rate page: no room picker, one price for everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCatalog {
    pub default_rate: i64,
    pub rooms: Vec<RoomOption>,
}

impl RoomCatalog {
    pub fn new(default_rate: i64, rooms: Vec<RoomOption>) -> Self {
        Self {
            default_rate,
            rooms,
        }
    }

    pub fn flat(rate: i64) -> Self {
        Self::new(rate, Vec::new())
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_RATE, builtin_rooms())
    }

    pub fn is_flat(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&RoomOption> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// The room preselected on a fresh form.
    pub fn first(&self) -> Option<&RoomOption> {
        self.rooms.first()
    }

    /// Nightly rate for the selected room, falling back to `default_rate`.
    ///
    /// A miss against a non-empty catalog means the form and the catalog
    /// disagree, so it gets logged instead of silently priced.
    pub fn resolve_rate(&self, room_id: Option<&str>) -> i64 {
        if self.is_flat() {
            return self.default_rate;
        }

        match room_id.and_then(|id| self.find(id)) {
            Some(room) => room.price_per_night,
            None => {
                warn!(
                    room_id = room_id.unwrap_or("<none>"),
                    fallback = self.default_rate,
                    "room not in catalog, using default rate"
                );
                self.default_rate
            }
        }
    }
}

fn builtin_rooms() -> Vec<RoomOption> {
    vec![
        RoomOption {
            id: "standard".into(),
            display_name: "Стандарт".into(),
            price_per_night: 3500,
            icon: "Bed".into(),
            description: "Уютный номер для комфортного отдыха".into(),
            features: vec![
                "Двуспальная кровать".into(),
                "Wi-Fi".into(),
                "Телевизор".into(),
            ],
            image: "/static/rooms/standard.jpg".into(),
        },
        RoomOption {
            id: "deluxe".into(),
            display_name: "Делюкс".into(),
            price_per_night: 7500,
            icon: "Star".into(),
            description: "Просторный номер с видом на город".into(),
            features: vec![
                "Кровать king-size".into(),
                "Мини-бар".into(),
                "Вид на город".into(),
                "Wi-Fi".into(),
            ],
            image: "/static/rooms/deluxe.jpg".into(),
        },
        RoomOption {
            id: "suite".into(),
            display_name: "Люкс".into(),
            price_per_night: 12000,
            icon: "Crown".into(),
            description: "Роскошные апартаменты с гостиной".into(),
            features: vec![
                "Отдельная гостиная".into(),
                "Джакузи".into(),
                "Панорамные окна".into(),
                "Завтрак включён".into(),
            ],
            image: "/static/rooms/suite.jpg".into(),
        },
    ]
}
