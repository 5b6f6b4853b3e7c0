use crate::domain::form::DATE_INPUT_FORMAT;
use crate::locale::format_day_month_year;
use crate::templates::components::icon;
use chrono::{NaiveDate, NaiveDateTime};
use maud::{html, Markup};

/// One picker: a native date input plus the Russian label of the chosen day.
///
/// `min` is the first enabled date; `None` disables the picker entirely
/// (check-out before a check-in is chosen).
pub fn date_field(
    name: &str,
    label: &str,
    value: Option<NaiveDateTime>,
    min: Option<NaiveDate>,
) -> Markup {
    let input_value = value
        .map(|v| v.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default();
    let caption = value
        .map(|v| format_day_month_year(&v))
        .unwrap_or_else(|| "Выберите дату".to_string());

    html! {
        div class="space-y-2" {
            label for=(name) class="text-base font-semibold text-gray-700" { (label) }
            div class="flex items-center gap-2 h-12 border-2 rounded-md px-3" {
                (icon("CalendarDays", 20))
                input
                    type="date"
                    id=(name)
                    name=(name)
                    value=(input_value)
                    min=[min.map(|m| m.format(DATE_INPUT_FORMAT).to_string())]
                    disabled[min.is_none()]
                    class="flex-1 bg-transparent";
            }
            p class="text-sm text-gray-500" data-caption=(name) { (caption) }
        }
    }
}
