use crate::domain::catalog::RoomOption;
use crate::locale::format_rubles;
use crate::templates::components::icon;
use maud::{html, Markup};

pub fn room_card(room: &RoomOption, selected: bool) -> Markup {
    let border = if selected {
        "border-purple-500 ring-2 ring-purple-300"
    } else {
        "border-purple-100"
    };

    html! {
        label class=(format!("block cursor-pointer rounded-xl border-2 bg-white overflow-hidden {border}")) {
            input type="radio" name="room" value=(room.id) checked[selected] class="sr-only";
            img src=(room.image) alt=(room.display_name) class="h-40 w-full object-cover";
            div class="p-4 space-y-2" {
                div class="flex items-center gap-2" {
                    (icon(&room.icon, 20))
                    h3 class="text-xl font-semibold" { (room.display_name) }
                }
                p class="text-gray-600" { (room.description) }
                ul class="text-sm text-gray-700 list-disc pl-5" {
                    @for feature in &room.features {
                        li { (feature) }
                    }
                }
                p class="font-bold text-purple-700" { (format_rubles(room.price_per_night)) " / ночь" }
            }
        }
    }
}
