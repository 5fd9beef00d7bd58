use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::domain::recipe::entities::{ChatCompletion, CompletionError};

type InFlight = Shared<BoxFuture<'static, Result<ChatCompletion, CompletionError>>>;

/// Lets identical requests that overlap in time share one upstream call.
///
/// An entry lives only while its call is in flight. Once the first caller is done
/// (or dropped) the entry is removed, so a later identical request starts a new call
/// and nothing is cached.
#[derive(Default)]
pub struct RequestCoalescer {
    in_flight: Mutex<HashMap<String, InFlight>>,
}

struct LeaderGuard<'a> {
    coalescer: &'a RequestCoalescer,
    key: String,
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        self.coalescer.lock().remove(&self.key);
    }
}

impl RequestCoalescer {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, InFlight>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn run<F>(
        &self,
        key: String,
        start: F,
    ) -> Result<ChatCompletion, CompletionError>
    where
        F: FnOnce() -> BoxFuture<'static, Result<ChatCompletion, CompletionError>>,
    {
        let (call, _guard) = {
            let mut in_flight = self.lock();
            match in_flight.get(&key) {
                Some(call) => (call.clone(), None),
                None => {
                    let call = start().shared();
                    in_flight.insert(key.clone(), call.clone());
                    (
                        call,
                        Some(LeaderGuard {
                            coalescer: self,
                            key,
                        }),
                    )
                }
            }
        };

        call.await
    }

    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use tokio::sync::Notify;

    use super::*;

    fn completion(content: &str) -> ChatCompletion {
        ChatCompletion {
            content: content.to_string(),
            model: None,
        }
    }

    #[tokio::test]
    async fn test_concurrent_identical_requests_share_one_call() {
        let coalescer = RequestCoalescer::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());

        let start = || {
            let calls = calls.clone();
            let release = release.clone();
            move || {
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    release.notified().await;
                    Ok(completion("stew"))
                }
                .boxed()
            }
        };

        let (first, second, ()) = futures::join!(
            coalescer.run("rice".to_string(), start()),
            coalescer.run("rice".to_string(), start()),
            async { release.notify_one() },
        );

        assert_eq!(first, Ok(completion("stew")));
        assert_eq!(second, Ok(completion("stew")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(coalescer.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_sequential_requests_are_not_cached() {
        let coalescer = RequestCoalescer::default();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            let result = coalescer
                .run("rice".to_string(), move || {
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(completion("stew"))
                    }
                    .boxed()
                })
                .await;
            assert!(result.is_ok());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(coalescer.in_flight(), 0);
    }
}
