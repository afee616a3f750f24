use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

pub const CACHE_DURATION: Duration = Duration::minutes(5);

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
struct CacheEntry<T> {
    value: Arc<T>,
    expires_at: DateTime<Utc>,
}

/// Result of the last refresh that ran under the refresh lock.
#[derive(Debug)]
struct LastRefresh<E> {
    generation: u64,
    failure: Option<E>,
}

/// One cached value with a fixed time-to-live.
///
/// A stored value is served only while `now < expires_at`. Concurrent misses
/// going through [`SlotCache::get_or_try_refresh`] share a single refresh,
/// whether it succeeds or fails.
pub struct SlotCache<T, E> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CacheEntry<T>>>,
    refresh: AsyncMutex<LastRefresh<E>>,
    // mirrors `LastRefresh::generation` so callers can read it before queueing
    generation: AtomicU64,
}

impl<T, E> SlotCache<T, E> {
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
            refresh: AsyncMutex::new(LastRefresh {
                generation: 0,
                failure: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// The stored value, unless it is missing or expired.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        let now = self.clock.now();
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| now < entry.expires_at)
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Store `value` until `now + ttl`, replacing whatever was there.
    pub fn set(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let expires_at = self.clock.now() + self.ttl;
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CacheEntry {
            value: Arc::clone(&value),
            expires_at,
        });
        debug!(%expires_at, "cache slot refreshed");
        value
    }

    /// Read-through lookup: return the cached value, or run `refresh`, store
    /// its result and return it.
    ///
    /// Only one refresh runs at a time. A caller that queued behind a refresh
    /// takes that refresh's outcome: the stored value on success, a clone of
    /// its error on failure. Errors are never stored in the slot, so a caller
    /// arriving after a failed refresh has finished runs a new one.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the slot is empty or expired and `refresh` fails,
    /// or if the refresh this caller waited on failed.
    pub async fn get_or_try_refresh<F, Fut>(&self, refresh: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Clone,
    {
        if let Some(value) = self.get() {
            debug!("cache hit");
            return Ok(value);
        }

        let seen = self.generation.load(Ordering::Acquire);
        let mut last = self.refresh.lock().await;

        if let Some(value) = self.get() {
            debug!("cache filled by concurrent refresh");
            return Ok(value);
        }
        if last.generation != seen
            && let Some(err) = &last.failure
        {
            debug!("concurrent refresh failed, sharing its error");
            return Err(err.clone());
        }

        debug!("cache miss, refreshing");
        let outcome = refresh().await;
        last.generation += 1;
        self.generation.store(last.generation, Ordering::Release);
        match outcome {
            Ok(fresh) => {
                last.failure = None;
                Ok(self.set(fresh))
            }
            Err(err) => {
                last.failure = Some(err.clone());
                Err(err)
            }
        }
    }
}
