use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitleague_tracker::models::{Activity, User};
use fitleague_tracker::services::{LeaderboardRanker, RankingConfig};

fn make_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            user_id: format!("user-{:05}", i),
            name: format!("Bench User {}", i),
            email: format!("bench{}@example.com", i),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            team_id: Some(format!("team-{}", i % 10)),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        })
        .collect()
}

fn make_activities(user_count: usize, count: usize) -> Vec<Activity> {
    let date = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    (0..count)
        .map(|i| Activity {
            activity_id: format!("act-{:06}", i),
            user_id: format!("user-{:05}", i % user_count),
            activity_type: "Running".to_string(),
            duration_minutes: 30 + (i % 90) as u32,
            calories_burned: 100 + (i % 700) as u32,
            date,
            recorded_at: "2024-03-01T09:00:00Z".to_string(),
        })
        .collect()
}

fn benchmark_recompute(c: &mut Criterion) {
    let ranker = LeaderboardRanker::new(RankingConfig::default());
    let computed_at = "2024-03-02T00:00:00Z";

    let small_users = make_users(100);
    let small_activities = make_activities(100, 1_000);

    let large_users = make_users(2_000);
    let large_activities = make_activities(2_000, 50_000);

    // Worst case for the tie-break: everyone lands on the same total,
    // so ordering falls entirely to the user ID comparison.
    let tied_users = make_users(2_000);
    let mut tied_activities = make_activities(2_000, 2_000);
    for activity in &mut tied_activities {
        activity.calories_burned = 250;
    }

    let mut group = c.benchmark_group("leaderboard_recompute");

    group.bench_function("100_users_1k_activities", |b| {
        b.iter(|| {
            ranker.recompute(
                black_box(&small_users),
                black_box(&small_activities),
                black_box(computed_at),
            )
        })
    });

    group.bench_function("2k_users_50k_activities", |b| {
        b.iter(|| {
            ranker.recompute(
                black_box(&large_users),
                black_box(&large_activities),
                black_box(computed_at),
            )
        })
    });

    group.bench_function("2k_users_all_tied", |b| {
        b.iter(|| {
            ranker.recompute(
                black_box(&tied_users),
                black_box(&tied_activities),
                black_box(computed_at),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_recompute);
criterion_main!(benches);
