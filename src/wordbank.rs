use crate::error::GameError;
use crate::provider::{NameListProvider, PLAYER_LIST_PROMPT};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

pub const MAX_POOL_SIZE: usize = 40;
pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 20;

/// Pool used whenever the name list cannot be fetched or is unusable.
pub const DEFAULT_PLAYERS: [&str; 8] = [
    "mohamed salah",
    "erling haaland",
    "bukayo saka",
    "cole palmer",
    "bruno fernandes",
    "declan rice",
    "phil foden",
    "virgil van dijk",
];

/// Deduplicated candidate secrets, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from raw names, applying the format filter, dedup and
    /// the size cap.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| is_valid_name(name))
            .filter(|name| seen.insert(name.clone()))
            .take(MAX_POOL_SIZE)
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn default_players() -> Self {
        Self::from_names(DEFAULT_PLAYERS)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Pick a secret uniformly at random.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GameError> {
        self.words.choose(rng).cloned().ok_or(GameError::EmptyPool)
    }
}

/// Lowercase ASCII letters and spaces, 3 to 20 characters.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
}

/// Parse the comma-separated text a name-list provider returns.
#[must_use]
pub fn parse_name_list(data: &str) -> WordPool {
    WordPool::from_names(data.to_lowercase().split(','))
}

/// Fetch a pool from `provider`, falling back to `DEFAULT_PLAYERS` on any
/// failure or when nothing usable comes back. Never fails.
pub fn acquire<P: NameListProvider + ?Sized>(provider: &P) -> WordPool {
    match provider.list_names(PLAYER_LIST_PROMPT) {
        Ok(raw) => {
            let pool = parse_name_list(&raw);
            if pool.is_empty() {
                log::warn!("name list had no usable entries, using default players");
                WordPool::default_players()
            } else {
                log::info!("loaded {} player names", pool.len());
                pool
            }
        }
        Err(e) => {
            log::warn!("could not fetch player names ({e}), using default players");
            WordPool::default_players()
        }
    }
}

/// Lazily acquired pool, computed at most once.
#[derive(Debug, Default)]
pub struct PoolCache {
    cell: OnceLock<Arc<WordPool>>,
}

impl PoolCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_acquire<P: NameListProvider + ?Sized>(&self, provider: &P) -> Arc<WordPool> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(acquire(provider))))
    }

    #[must_use]
    pub fn get(&self) -> Option<Arc<WordPool>> {
        self.cell.get().cloned()
    }
}

static PROCESS_POOL: PoolCache = PoolCache::new();

/// The process-wide pool; `provider` is only consulted on the first call.
pub fn cached_pool<P: NameListProvider + ?Sized>(provider: &P) -> Arc<WordPool> {
    PROCESS_POOL.get_or_acquire(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::{NoNameList, StaticNameList};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
    }

    impl NameListProvider for Counting {
        fn list_names(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.calls.set(self.calls.get() + 1);
            Ok("saka, rice".to_string())
        }
    }

    #[test]
    fn test_parse_normalizes_and_filters() {
        let pool = parse_name_list("Bukayo Saka,  COLE PALMER , son heung-min, al, 12345, ");
        assert_eq!(pool.words(), &["bukayo saka", "cole palmer"]);
    }

    #[test]
    fn test_parse_dedupes_in_order() {
        let pool = parse_name_list("rice, saka, Rice, saka, foden");
        assert_eq!(pool.words(), &["rice", "saka", "foden"]);
    }

    #[test]
    fn test_length_bounds() {
        assert!(is_valid_name("kai"));
        assert!(!is_valid_name("ki"));
        assert!(is_valid_name("abcdefghijklmnopqrst"));
        assert!(!is_valid_name("abcdefghijklmnopqrstu"));
        assert!(!is_valid_name("Saka"));
        assert!(!is_valid_name("o'shea"));
    }

    #[test]
    fn test_pool_is_capped() {
        let many: String = (0..50)
            .map(|i| format!("p{}{}", (b'a' + (i / 26) as u8) as char, (b'a' + (i % 26) as u8) as char))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(parse_name_list(&many).len(), MAX_POOL_SIZE);
    }

    #[test]
    fn test_acquire_failure_uses_defaults() {
        let pool = acquire(&NoNameList);
        assert_eq!(pool.len(), 8);
        assert_eq!(pool, WordPool::default_players());
        for name in DEFAULT_PLAYERS {
            assert!(pool.contains(name));
        }
    }

    #[test]
    fn test_acquire_empty_result_uses_defaults() {
        let pool = acquire(&StaticNameList("1, 2, !!!".to_string()));
        assert_eq!(pool, WordPool::default_players());
    }

    #[test]
    fn test_acquire_success() {
        let pool = acquire(&StaticNameList("Declan Rice,Phil Foden".to_string()));
        assert_eq!(pool.words(), &["declan rice", "phil foden"]);
    }

    #[test]
    fn test_default_players_all_valid() {
        assert!(DEFAULT_PLAYERS.iter().all(|n| is_valid_name(n)));
        assert_eq!(WordPool::default_players().len(), DEFAULT_PLAYERS.len());
    }

    #[test]
    fn test_cache_acquires_once() {
        let cache = PoolCache::new();
        assert!(cache.get().is_none());
        let provider = Counting { calls: Cell::new(0) };
        let first = cache.get_or_acquire(&provider);
        let second = cache.get_or_acquire(&provider);
        let third = cache.get_or_acquire(&NoNameList);
        assert_eq!(provider.calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(first.words(), &["saka", "rice"]);
    }

    #[test]
    fn test_select_from_pool() {
        let pool = WordPool::default_players();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = pool.select(&mut rng).unwrap();
            assert!(pool.contains(&word));
        }
    }

    #[test]
    fn test_select_is_reproducible_with_seed() {
        let pool = WordPool::default_players();
        let a: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| pool.select(&mut rng).unwrap()).collect()
        };
        let b: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| pool.select(&mut rng).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_empty_pool() {
        let pool = WordPool::from_names(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.select(&mut rng), Err(GameError::EmptyPool));
    }
}
