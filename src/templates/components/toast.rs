use crate::notifications::{Toast, ToastVariant};
use maud::{html, Markup};

/// Live region the page's toasts are rendered into.
pub fn toast_region(toasts: &[Toast]) -> Markup {
    html! {
        div id="toasts" class="fixed top-4 right-4 z-50 space-y-2 max-w-sm" role="status" aria-live="polite" {
            @for toast in toasts {
                @let (variant, class) = match toast.variant {
                    ToastVariant::Default => ("default", "bg-white text-gray-900 border"),
                    ToastVariant::Destructive => ("destructive", "bg-red-600 text-white"),
                };
                div class=(format!("rounded-lg shadow-lg p-4 {class}")) data-variant=(variant) {
                    p class="font-semibold" { (toast.title) }
                    p class="text-sm" { (toast.description) }
                }
            }
        }
    }
}
