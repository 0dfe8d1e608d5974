// web_app/components/toast.rs - Transient notifications
//
// `provide_toaster` is called once by the App; any component can then
// grab the `Toaster` with `use_toaster` and push a notification. The
// `ToastViewport` renders whatever is queued.

use std::time::Duration;

use leptos::prelude::*;

/// How long a toast stays on screen unless dismissed
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, title, description, variant });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle for showing notifications
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    /// Show a toast; it is removed after `TOAST_DURATION`
    pub fn toast(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let (title, description) = (title.into(), description.into());
        let id = self
            .queue
            .try_update(|q| q.push(title, description, variant))
            .unwrap_or_default();

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
        id
    }

    pub fn dismiss(&self, id: u64) {
        // The page may be gone by the time the timer fires
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a Toaster and put it in context
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Fetch the Toaster from context, creating a detached one if none exists
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        leptos::logging::warn!("No Toaster in context; notifications will not be shown");
        Toaster::new()
    })
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => {
            "pointer-events-auto w-80 rounded-xl border border-gray-200 bg-white p-4 shadow-lg"
        }
        ToastVariant::Destructive => {
            "pointer-events-auto w-80 rounded-xl border border-red-200 bg-red-50 p-4 shadow-lg text-red-800"
        }
    }
}

/// Fixed-position stack of the current toasts
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none" role="status">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.variant)>
                            <div class="flex items-start justify-between gap-4">
                                <div>
                                    <p class="font-semibold">{toast.title}</p>
                                    <p class="text-sm opacity-90">{toast.description}</p>
                                </div>
                                <button
                                    type="button"
                                    class="text-gray-400 hover:text-gray-600"
                                    title="Dismiss"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push("A".into(), "first".into(), ToastVariant::Default);
        let b = queue.push("B".into(), "second".into(), ToastVariant::Destructive);
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[1].variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_queue_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push("A".into(), "first".into(), ToastVariant::Default);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.items().is_empty());
    }

    #[test]
    fn test_destructive_styling() {
        assert!(toast_class(ToastVariant::Destructive).contains("bg-red-50"));
        assert!(toast_class(ToastVariant::Default).contains("bg-white"));
    }
}
