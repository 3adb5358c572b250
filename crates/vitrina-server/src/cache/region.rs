//! Cache regions built on Moka.

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use moka::future::Cache;

use vitrina_core::CatalogError;

use crate::metrics::CacheMetrics;

/// Configuracion de una region de cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL en segundos (default: 300 = 5 minutos)
    pub ttl_seconds: u64,
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
    /// Time-to-idle en segundos (opcional)
    pub tti_seconds: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            max_capacity: 10_000,
            tti_seconds: None,
        }
    }
}

/// Valor cacheado, estampado con la epoch de eviccion vigente cuando su
/// computo arranco. Una entry de una epoch anterior se trata como miss.
struct CachedEntry<V> {
    value: Arc<V>,
    epoch: u64,
}

impl<V> Clone for CachedEntry<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            epoch: self.epoch,
        }
    }
}

/// Region de cache independiente: un mapa key→value thread-safe con
/// poblacion read-through, puts directos, eviccion puntual y evict-all.
///
/// Garantias de concurrencia:
/// - single-flight por key: misses concurrentes para la misma key ejecutan
///   el computo una sola vez (Moka `try_get_with`), y todos los callers
///   reciben el mismo resultado o el mismo fallo;
/// - evict-all con epoch: `invalidate_all` incrementa la epoch de la
///   region antes de vaciarla, de modo que una poblacion en vuelo (que
///   lleva la epoch anterior) nunca puede resucitar una entry evictada.
///
/// # Examples
///
/// ```no_run
/// use vitrina_server::cache::{CacheConfig, CacheRegion};
///
/// # #[tokio::main]
/// # async fn main() {
/// let region: CacheRegion<String, u32> = CacheRegion::new("items", CacheConfig::default());
/// region.insert("Apple".to_string(), 50).await;
///
/// if let Some(stock) = region.get(&"Apple".to_string()).await {
///     println!("stock: {}", stock);
/// }
/// # }
/// ```
pub struct CacheRegion<K, V> {
    inner: Cache<K, CachedEntry<V>>,
    epoch: AtomicU64,
    metrics: CacheMetrics,
}

impl<K, V> CacheRegion<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Crea una region con la configuracion dada. El nombre identifica la
    /// region en las metricas.
    pub fn new(region: &'static str, config: CacheConfig) -> Self {
        let metrics = CacheMetrics::new(region);

        let mut builder = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_seconds));

        if let Some(tti) = config.tti_seconds {
            builder = builder.time_to_idle(Duration::from_secs(tti));
        }

        // Listener para registrar evictions del propio Moka (TTL/capacity)
        let eviction_metrics = metrics.clone();
        builder = builder.eviction_listener(move |_key, _value, cause| {
            let reason = match cause {
                moka::notification::RemovalCause::Expired => "ttl",
                moka::notification::RemovalCause::Size => "capacity",
                moka::notification::RemovalCause::Explicit => "manual",
                moka::notification::RemovalCause::Replaced => "replaced",
            };
            eviction_metrics.record_eviction(reason);
        });

        Self {
            inner: builder.build(),
            epoch: AtomicU64::new(0),
            metrics,
        }
    }

    /// Obtiene un valor del cache si existe y esta vigente.
    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        let start = Instant::now();

        let result = match self.inner.get(key).await {
            Some(entry) if entry.epoch == self.epoch.load(Ordering::Acquire) => Some(entry.value),
            Some(_) => {
                // entry de una epoch anterior: quedo huerfana de un evict-all
                self.inner.invalidate(key).await;
                None
            },
            None => None,
        };

        if result.is_some() {
            self.metrics.record_hit();
        } else {
            self.metrics.record_miss();
        }
        self.metrics
            .record_operation_duration("get", start.elapsed());
        self.update_entry_gauge();

        result
    }

    /// Retorna el valor cacheado o lo computa y almacena.
    ///
    /// Bajo la garantia single-flight, misses concurrentes para la misma
    /// key invocan `compute` una sola vez. Un fallo de `compute` se
    /// propaga a todos los callers y no deja entry cacheada.
    pub async fn get_or_compute<F, Fut>(&self, key: K, compute: F) -> Result<Arc<V>, CatalogError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, CatalogError>>,
    {
        let start = Instant::now();

        loop {
            // Epoch observada antes de que el computo arranque.
            let epoch = self.epoch.load(Ordering::Acquire);

            if let Some(entry) = self.inner.get(&key).await {
                if entry.epoch == self.epoch.load(Ordering::Acquire) {
                    self.metrics.record_hit();
                    self.metrics
                        .record_operation_duration("get_or_compute_hit", start.elapsed());
                    return Ok(entry.value);
                }
                self.inner.invalidate(&key).await;
            }

            self.metrics.record_miss();

            let entry = self
                .inner
                .try_get_with(key.clone(), async {
                    let value = compute().await?;
                    Ok(CachedEntry {
                        value: Arc::new(value),
                        epoch,
                    })
                })
                .await
                .map_err(|e: Arc<CatalogError>| (*e).clone())?;

            if entry.epoch == self.epoch.load(Ordering::Acquire) {
                self.metrics
                    .record_operation_duration("get_or_compute_miss", start.elapsed());
                self.update_entry_gauge();
                return Ok(entry.value);
            }

            // Un write aterrizo mientras esta poblacion estaba en vuelo:
            // la entry es de la epoch anterior, se descarta y se recomputa.
            self.inner.invalidate(&key).await;
        }
    }

    /// Inserta un valor directamente, sobreescribiendo el existente.
    pub async fn insert(&self, key: K, value: V) {
        let epoch = self.epoch.load(Ordering::Acquire);
        self.inner
            .insert(
                key,
                CachedEntry {
                    value: Arc::new(value),
                    epoch,
                },
            )
            .await;
        self.update_entry_gauge();
    }

    /// Invalida una entrada especifica. No-op si no existe.
    pub async fn invalidate(&self, key: &K) {
        self.inner.invalidate(key).await;
        self.update_entry_gauge();
    }

    /// Invalida todas las entradas de la region.
    ///
    /// La epoch se incrementa antes de vaciar el mapa: cualquier
    /// poblacion en vuelo queda marcada como obsoleta y no sobrevive.
    pub fn invalidate_all(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.inner.invalidate_all();
    }

    /// Retorna el numero aproximado de entries en la region.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Actualiza el gauge de entry count.
    fn update_entry_gauge(&self) {
        self.metrics.update_entry_count(self.inner.entry_count());
    }

    /// Sincroniza el cache (para tests principalmente).
    #[cfg(test)]
    pub(crate) async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    fn region() -> CacheRegion<String, u32> {
        CacheRegion::new("test", CacheConfig::default())
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = region();
        cache.insert("Apple".to_string(), 50).await;

        let cached = cache.get(&"Apple".to_string()).await;
        assert_eq!(cached.as_deref(), Some(&50));
    }

    #[tokio::test]
    async fn miss_returns_none() {
        let cache = region();
        assert!(cache.get(&"missing".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn insert_overwrites() {
        let cache = region();
        cache.insert("Apple".to_string(), 50).await;
        cache.insert("Apple".to_string(), 14).await;

        let cached = cache.get(&"Apple".to_string()).await;
        assert_eq!(cached.as_deref(), Some(&14));
    }

    #[tokio::test]
    async fn get_or_compute_populates_once() {
        let cache = region();
        let calls = AtomicU32::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_compute("Apple".to_string(), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(50)
                })
                .await
                .unwrap();
            assert_eq!(*value, 50);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn compute_failure_is_propagated_and_not_cached() {
        let cache = region();
        let calls = AtomicU32::new(0);

        let compute = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<u32, _>(CatalogError::not_found("Apple"))
        };

        let err = cache
            .get_or_compute("Apple".to_string(), compute)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        // el fallo no quedo cacheado: un segundo intento vuelve a computar
        let err = cache
            .get_or_compute("Apple".to_string(), compute)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = region();
        cache.insert("Apple".to_string(), 50).await;

        cache.invalidate(&"Apple".to_string()).await;
        cache.sync().await;

        assert!(cache.get(&"Apple".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_absent_key_is_noop() {
        let cache = region();
        cache.invalidate(&"missing".to_string()).await;
        assert!(cache.get(&"missing".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_empties_the_region() {
        let cache = region();
        for i in 0..10u32 {
            cache.insert(format!("item{}", i), i).await;
        }

        cache.invalidate_all();
        cache.sync().await;

        for i in 0..10u32 {
            assert!(cache.get(&format!("item{}", i)).await.is_none());
        }
    }

    #[tokio::test]
    async fn in_flight_population_does_not_survive_invalidate_all() {
        let cache = region();
        let calls = AtomicU32::new(0);

        // El primer computo simula un write que aterriza mientras la
        // poblacion esta en vuelo: esa poblacion debe descartarse.
        let value = cache
            .get_or_compute("k".to_string(), || async {
                let call = calls.fetch_add(1, Ordering::SeqCst);
                if call == 0 {
                    cache.invalidate_all();
                }
                Ok(call)
            })
            .await
            .unwrap();

        assert_eq!(*value, 1, "stale population must not win");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_misses_compute_once() {
        let cache = Arc::new(region());
        let calls = Arc::new(AtomicU32::new(0));

        let mut handles = vec![];
        for _ in 0..100 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_compute("Apple".to_string(), || {
                        let calls = Arc::clone(&calls);
                        async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(10)).await;
                            Ok(50u32)
                        }
                    })
                    .await
            }));
        }

        for handle in handles {
            let value = handle.await.unwrap().unwrap();
            assert_eq!(*value, 50);
        }

        // Moka garantiza una sola ejecucion del computo por key
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
