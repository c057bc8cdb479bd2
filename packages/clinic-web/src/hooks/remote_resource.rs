//! Generic remote-resource hook.
//!
//! Binds a [`RemoteResource`] state machine to the component lifecycle: the
//! key is derived through a memo, an effect reacts to key changes, and each
//! request runs on a task owned by the component's scope.

use std::future::Future;
use std::rc::Rc;

use clinic_client::{
    ApiError, Attempt, FailureMessages, KeyChange, RemoteResource,
};
use dioxus::prelude::*;

/// Handle returned by [`use_remote_resource`]. `Copy`, so it can be moved
/// into event handlers freely.
pub struct RemoteResourceHandle<K: 'static, T: 'static> {
    inner: Signal<RemoteResource<K, T>>,
    refetch: Callback<()>,
}

impl<K: 'static, T: 'static> Clone for RemoteResourceHandle<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for RemoteResourceHandle<K, T> {}

impl<K, T> RemoteResourceHandle<K, T>
where
    K: Clone + PartialEq + 'static,
    T: Clone + 'static,
{
    pub fn data(&self) -> Option<T> {
        self.inner.read().data().cloned()
    }

    pub fn loading(&self) -> bool {
        self.inner.read().loading()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.read().error().map(str::to_string)
    }

    /// Issue a new request for the current key, even if one is in flight.
    pub fn refetch(&self) {
        self.refetch.call(());
    }
}

/// Fetch `fetch(key)` on mount and whenever `key` yields a different value.
///
/// `key` is evaluated reactively; returning `None` means a precondition is
/// missing, so no request is made and the state shows the missing-key error.
pub fn use_remote_resource<K, T, F, Fut>(
    key: impl FnMut() -> Option<K> + 'static,
    messages: impl FnOnce() -> FailureMessages,
    fetch: F,
) -> RemoteResourceHandle<K, T>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut inner = use_signal(move || RemoteResource::new(messages()));
    let fetch = use_hook(|| Rc::new(fetch));
    let key = use_memo(key);

    let launch = use_callback(move |(attempt, key): (Attempt, K)| {
        let fetch = fetch.clone();
        spawn(async move {
            let outcome = (*fetch)(key).await;
            inner.write().settle(attempt, outcome);
        });
    });

    use_effect(move || {
        let current = key.read().clone();
        let change = inner.write().observe_key(current);
        if let KeyChange::Fetch(key) = change {
            let attempt = inner.write().begin();
            launch.call((attempt, key));
        }
    });

    let refetch = use_callback(move |_: ()| {
        let next = inner.write().refetch();
        if let Some(request) = next {
            launch.call(request);
        }
    });

    RemoteResourceHandle { inner, refetch }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;

    type Mounted = (Signal<Option<u32>>, RemoteResourceHandle<u32, u32>);

    thread_local! {
        static CALLS: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
        static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness(initial: Option<u32>) -> Element {
        let key = use_signal(move || initial);
        let resource = use_remote_resource(
            move || key(),
            || FailureMessages::for_resource("queue"),
            |limit: u32| {
                CALLS.with(|calls| calls.borrow_mut().push(limit));
                async move { Ok::<_, ApiError>(limit * 10) }
            },
        );
        MOUNTED.with(|m| *m.borrow_mut() = Some((key, resource)));
        rsx! {}
    }

    fn mount(initial: Option<u32>) -> VirtualDom {
        CALLS.with(|calls| calls.borrow_mut().clear());
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { initial });
        dom.rebuild_in_place();
        dom
    }

    /// Run effects and spawned fetches until the dom goes quiet.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..16 {
            let idle = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work())
                .await
                .is_err();
            dom.render_immediate(&mut NoOpMutations);
            if idle {
                break;
            }
        }
    }

    fn mounted() -> Mounted {
        MOUNTED.with(|m| m.borrow().expect("harness is mounted"))
    }

    fn calls() -> Vec<u32> {
        CALLS.with(|calls| calls.borrow().clone())
    }

    #[tokio::test]
    async fn fetches_once_per_distinct_key_and_on_refetch() {
        let mut dom = mount(Some(5));
        settle(&mut dom).await;
        let (mut key, resource) = mounted();

        assert_eq!(calls(), vec![5]);
        dom.in_runtime(|| {
            assert_eq!(resource.data(), Some(50));
            assert!(!resource.loading());
            assert_eq!(resource.error(), None);
        });

        dom.in_runtime(|| key.set(Some(5)));
        settle(&mut dom).await;
        assert_eq!(calls(), vec![5]);

        dom.in_runtime(|| key.set(Some(7)));
        settle(&mut dom).await;
        assert_eq!(calls(), vec![5, 7]);
        dom.in_runtime(|| assert_eq!(resource.data(), Some(70)));

        dom.in_runtime(|| resource.refetch());
        settle(&mut dom).await;
        assert_eq!(calls(), vec![5, 7, 7]);

        dom.in_runtime(|| key.set(None));
        settle(&mut dom).await;
        assert_eq!(calls(), vec![5, 7, 7]);
        dom.in_runtime(|| {
            assert_eq!(resource.error().as_deref(), Some("Cannot fetch queue yet"));
            assert_eq!(resource.data(), None);
            assert!(!resource.loading());
        });
    }

    #[tokio::test]
    async fn missing_key_at_mount_never_requests() {
        let mut dom = mount(None);
        settle(&mut dom).await;
        let (_, resource) = mounted();

        assert!(calls().is_empty());
        dom.in_runtime(|| {
            assert_eq!(resource.error().as_deref(), Some("Cannot fetch queue yet"));
            assert!(!resource.loading());
        });

        dom.in_runtime(|| resource.refetch());
        settle(&mut dom).await;
        assert!(calls().is_empty());
    }
}
