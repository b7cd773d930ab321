//! Leaderboard ranking

use crate::LeaderboardEntry;
use crate::store::{LEADERBOARD_KEY, Storage};

/// Entries shown on the dashboard
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

/// Rank by progress, highest first, keeping ties in stored order
pub fn top_n(entries: &[LeaderboardEntry], n: usize) -> Vec<LeaderboardEntry> {
    let mut ranked = entries.to_vec();
    // `sort_by` is stable
    ranked.sort_by(|a, b| b.progress.cmp(&a.progress));
    ranked.truncate(n);
    ranked
}

/// Stored leaderboard, empty if missing or unreadable
pub fn load_leaderboard(storage: &Storage) -> Vec<LeaderboardEntry> {
    storage.read(LEADERBOARD_KEY, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{ensure_seeded, seed_leaderboard};

    #[test]
    fn test_ranks_seed_entries() {
        let ranked = top_n(&seed_leaderboard(), DEFAULT_LEADERBOARD_SIZE);

        let names: Vec<_> = ranked.iter().map(|e| e.name.as_str()).collect();
        let progress: Vec<_> = ranked.iter().map(|e| e.progress).collect();
        assert_eq!(names, ["Liam", "Ava", "Noah", "Mia"]);
        assert_eq!(progress, [95, 82, 68, 40]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let entries = vec![
            LeaderboardEntry::new("a", "First", 7, 50),
            LeaderboardEntry::new("b", "Top", 7, 90),
            LeaderboardEntry::new("c", "Second", 14, 50),
            LeaderboardEntry::new("d", "Third", 21, 50),
        ];
        let ids: Vec<_> = top_n(&entries, 10).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let entries: Vec<_> = (0..8u8)
            .map(|i| LeaderboardEntry::new(&format!("u{i}"), "x", 7, i * 10))
            .collect();

        let ranked = top_n(&entries, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].progress, 70);
        assert_eq!(ranked[4].progress, 30);
        assert!(top_n(&entries, 0).is_empty());
    }

    #[test]
    fn test_load_from_storage() {
        let storage = Storage::in_memory();
        assert!(load_leaderboard(&storage).is_empty());

        ensure_seeded(&storage);
        assert_eq!(load_leaderboard(&storage).len(), 4);
    }
}
