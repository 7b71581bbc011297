/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, and dispatches
/// subcommands against the HabitTracker facade. The CLI holds no state of
/// its own; every mutation passes an explicit habit id.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{HabitFilter, HabitId, HabitTracker, Periodicity};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Add {
        /// Habit name (must be unique)
        name: String,
        /// Free-form description
        description: String,
        /// Cadence: daily or weekly
        periodicity: String,
    },
    /// List habits
    List {
        /// Restrict to one periodicity: all, daily, or weekly
        #[arg(long, default_value = "all")]
        filter: String,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a completion for a habit (streak +1)
    Done {
        /// Habit id
        id: i64,
    },
    /// Record a miss for a habit (streak back to 0)
    Miss {
        /// Habit id
        id: i64,
    },
    /// Delete a habit permanently
    Remove {
        /// Habit id
        id: i64,
    },
    /// Show summary statistics
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a text bar chart of streaks, highest first
    Chart,
}

fn parse_filter(s: &str) -> Result<HabitFilter, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(HabitFilter::All),
        "daily" => Ok(HabitFilter::daily()),
        "weekly" => Ok(HabitFilter::weekly()),
        other => Err(format!("invalid filter {:?} (expected all, daily, or weekly)", other)),
    }
}

fn run(tracker: &HabitTracker, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Add {
            name,
            description,
            periodicity,
        } => {
            let periodicity: Periodicity = periodicity.parse()?;
            let habit = tracker.create(name, description, periodicity)?;
            println!("Added habit {} ({})", habit.name, habit.id);
        }
        Command::List { filter, json } => {
            let habits = tracker.list(parse_filter(&filter)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            } else if habits.is_empty() {
                println!("No habits to show.");
            } else {
                println!("{:<5} {:<20} {:<10} {:<7} Description", "ID", "Name", "Cadence", "Streak");
                for habit in habits {
                    println!(
                        "{:<5} {:<20} {:<10} {:<7} {}",
                        habit.id, habit.name, habit.periodicity, habit.streak, habit.description
                    );
                }
            }
        }
        Command::Done { id } => {
            let id = HabitId(id);
            tracker.record_completion(id)?;
            let habit = tracker.get(id)?;
            println!("Completion recorded for {}: streak is now {}", habit.name, habit.streak);
        }
        Command::Miss { id } => {
            let id = HabitId(id);
            tracker.record_miss(id)?;
            let habit = tracker.get(id)?;
            println!("Miss recorded for {}: streak reset to 0", habit.name);
        }
        Command::Remove { id } => {
            tracker.delete(HabitId(id))?;
            println!("Removed habit {}", id);
        }
        Command::Stats { json } => {
            let total = tracker.total_count()?;
            let longest = tracker.longest_streak()?;
            let counts = tracker.count_by_periodicity()?;

            if json {
                let by_periodicity: std::collections::HashMap<String, usize> = counts
                    .into_iter()
                    .map(|(p, n)| (p.as_str().to_string(), n))
                    .collect();
                let stats = serde_json::json!({
                    "total_habits": total,
                    "longest_streak": longest,
                    "by_periodicity": by_periodicity,
                });
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Total habits: {}", total);
                if let Some(best) = longest {
                    println!("Longest streak: {} (habit: {})", best.streak, best.name);
                }
                for (periodicity, count) in counts {
                    println!("{} habits: {}", periodicity, count);
                }
            }
        }
        Command::Chart => {
            let ranked = tracker.ranked_by_streak()?;
            if ranked.is_empty() {
                println!("No habits to show.");
            } else {
                let widest_name = ranked.iter().map(|e| e.name.len()).max().unwrap_or(0);
                for entry in ranked {
                    let bar = "#".repeat(entry.streak as usize);
                    println!("{:<width$} | {} {}", entry.name, bar, entry.streak, width = widest_name);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let tracker = HabitTracker::open(&db_path)?;
    run(&tracker, args.command)
}
