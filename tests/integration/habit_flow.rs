/// End-to-end tests over the HabitTracker facade
use habit_tracker::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod habit_flow_tests {
    use super::*;

    #[test]
    fn test_duplicate_name_is_rejected_once() {
        let tracker = HabitTracker::open_in_memory().unwrap();

        tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
        let second = tracker.create("Read", "Another reading habit", Periodicity::Weekly);

        assert!(matches!(
            second,
            Err(TrackerError::Storage(StorageError::DuplicateName { ref name })) if name == "Read"
        ));

        let habits = tracker.list(HabitFilter::All).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].description, "Read 20 pages");
    }

    #[test]
    fn test_completions_accumulate_and_miss_resets() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        let habit = tracker.create("Gym", "Workout", Periodicity::Weekly).unwrap();

        for expected in 1..=4u32 {
            tracker.record_completion(habit.id).unwrap();
            assert_eq!(tracker.get(habit.id).unwrap().streak, expected);
        }

        tracker.record_miss(habit.id).unwrap();
        assert_eq!(tracker.get(habit.id).unwrap().streak, 0);

        // A miss on an already-zero streak is still valid
        tracker.record_miss(habit.id).unwrap();
        assert_eq!(tracker.get(habit.id).unwrap().streak, 0);
    }

    #[test]
    fn test_delete_semantics() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        let read = tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
        let gym = tracker.create("Gym", "Workout", Periodicity::Weekly).unwrap();

        // Deleting an unknown id does not raise and changes nothing
        tracker.delete(HabitId(999)).unwrap();
        assert_eq!(tracker.total_count().unwrap(), 2);

        // Deleting an existing id removes exactly that record
        tracker.delete(read.id).unwrap();
        assert_eq!(tracker.total_count().unwrap(), 1);
        assert!(matches!(
            tracker.get(read.id),
            Err(TrackerError::Storage(StorageError::HabitNotFound { .. }))
        ));
        assert!(tracker.get(gym.id).is_ok());
    }

    #[test]
    fn test_filtered_listing_agrees_with_periodicity_counts() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
        tracker.create("Gym", "Workout", Periodicity::Weekly).unwrap();
        tracker.create("Meditate", "10 minutes", Periodicity::Daily).unwrap();

        let daily = tracker.list(HabitFilter::daily()).unwrap();
        assert!(daily.iter().all(|h| h.periodicity == Periodicity::Daily));

        let weekly = tracker.list(HabitFilter::weekly()).unwrap();
        let all = tracker.list(HabitFilter::All).unwrap();
        assert_eq!(all.len(), daily.len() + weekly.len());

        let counts = tracker.count_by_periodicity().unwrap();
        assert_eq!(counts.get(&Periodicity::Daily), Some(&daily.len()));
        assert_eq!(counts.get(&Periodicity::Weekly), Some(&weekly.len()));
    }

    #[test]
    fn test_longest_streak_matches_maximum() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        assert_eq!(tracker.longest_streak().unwrap(), None);

        let read = tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
        let gym = tracker.create("Gym", "Workout", Periodicity::Weekly).unwrap();
        for _ in 0..5 {
            tracker.record_completion(read.id).unwrap();
        }
        tracker.record_completion(gym.id).unwrap();

        let best = tracker.longest_streak().unwrap().unwrap();
        let max = tracker
            .list(HabitFilter::All)
            .unwrap()
            .into_iter()
            .map(|h| h.streak)
            .max()
            .unwrap();
        assert_eq!(best.streak, max);
        assert_eq!(best.name, "Read");
    }

    #[test]
    fn test_ranking_scenario() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        let read = tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
        let gym = tracker.create("Gym", "Workout", Periodicity::Weekly).unwrap();

        for _ in 0..3 {
            tracker.record_completion(read.id).unwrap();
        }
        tracker.record_completion(gym.id).unwrap();

        let ranked = tracker.ranked_by_streak().unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].name.as_str(), ranked[0].streak), ("Read", 3));
        assert_eq!((ranked[1].name.as_str(), ranked[1].streak), ("Gym", 1));

        let counts = tracker.count_by_periodicity().unwrap();
        assert_eq!(counts.get(&Periodicity::Daily), Some(&1));
        assert_eq!(counts.get(&Periodicity::Weekly), Some(&1));
    }

    #[test]
    fn test_ranking_ties_keep_creation_order() {
        let tracker = HabitTracker::open_in_memory().unwrap();
        for name in ["Read", "Gym", "Meditate"] {
            let habit = tracker.create(name, "description", Periodicity::Daily).unwrap();
            tracker.record_completion(habit.id).unwrap();
            tracker.record_completion(habit.id).unwrap();
        }

        let names: Vec<_> = tracker
            .ranked_by_streak()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Read", "Gym", "Meditate"]);
    }

    #[test]
    fn test_data_persists_across_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let tracker = HabitTracker::open(&db_path).unwrap();
            let habit = tracker.create("Read", "Read 20 pages", Periodicity::Daily).unwrap();
            tracker.record_completion(habit.id).unwrap();
            tracker.record_completion(habit.id).unwrap();
        }

        let tracker = HabitTracker::open(&db_path).unwrap();
        let habits = tracker.list(HabitFilter::All).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Read");
        assert_eq!(habits[0].streak, 2);
    }

    #[test]
    fn test_opens_database_written_by_earlier_versions() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        // Lay out the table exactly as the original application did,
        // without any version tracking
        {
            let conn = rusqlite_open(&db_path);
            conn.execute(
                "CREATE TABLE IF NOT EXISTS habits (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT UNIQUE NOT NULL,
                    description TEXT NOT NULL,
                    periodicity TEXT NOT NULL,
                    streak INTEGER DEFAULT 0
                )",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO habits (name, description, periodicity, streak)
                 VALUES ('Gym', 'Workout', 'Weekly', 6)",
                [],
            )
            .unwrap();
        }

        let tracker = HabitTracker::open(&db_path).unwrap();
        let habits = tracker.list(HabitFilter::All).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Gym");
        assert_eq!(habits[0].periodicity, Periodicity::Weekly);
        assert_eq!(habits[0].streak, 6);
    }

    fn rusqlite_open(path: &std::path::Path) -> rusqlite::Connection {
        rusqlite::Connection::open(path).expect("Failed to open raw connection")
    }
}
