use chrono::NaiveDate;
use liftlog_domain as domain;

pub const CATALOG_JSON: &str = r#"[
  {
    "id": "Barbell_Bench_Press",
    "name": "Barbell Bench Press",
    "force": "push",
    "level": "beginner",
    "category": "strength",
    "equipment": "barbell",
    "primaryMuscles": ["chest"],
    "secondaryMuscles": ["shoulders", "triceps"],
    "instructions": ["Lie back on a flat bench.", "Lower the bar to the chest."]
  },
  {
    "name": " Barbell Squat ",
    "category": "strength",
    "equipment": "barbell",
    "primaryMuscles": ["quadriceps"],
    "secondaryMuscles": ["calves", "glutes", "hamstrings", "lower back"]
  },
  {
    "name": null,
    "category": "cardio",
    "equipment": "",
    "primaryMuscles": null
  },
  42,
  {
    "name": "Plank",
    "category": "strength",
    "equipment": null,
    "primaryMuscles": ["abdominals"]
  },
  {
    "name": ["Not", "A", "Name"],
    "primaryMuscles": ["chest"]
  }
]"#;

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        name: String::from("Barbell Bench Press"),
        category: String::from("strength"),
        equipment: Some(String::from("barbell")),
        primary_muscles: vec![String::from("chest")],
        secondary_muscles: vec![String::from("shoulders"), String::from("triceps")],
        instructions: vec![
            String::from("Lie back on a flat bench."),
            String::from("Lower the bar to the chest."),
        ],
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        name: String::from("Barbell Squat"),
        category: String::from("strength"),
        equipment: Some(String::from("barbell")),
        primary_muscles: vec![String::from("quadriceps")],
        secondary_muscles: vec![
            String::from("calves"),
            String::from("glutes"),
            String::from("hamstrings"),
            String::from("lower back"),
        ],
        instructions: vec![],
    });

pub static WORKOUTS: std::sync::LazyLock<Vec<domain::Workout>> =
    std::sync::LazyLock::new(|| vec![WORKOUT.clone(), WORKOUT_2.clone()]);

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 1_u128.into(),
        date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
        exercises: vec![domain::WorkoutExercise {
            exercise: EXERCISE.clone(),
            sets: vec![set(10, 100.0), set(8, 100.0)],
        }],
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 2_u128.into(),
        date: NaiveDate::from_ymd_opt(2020, 2, 5).unwrap(),
        exercises: vec![domain::WorkoutExercise {
            exercise: EXERCISE_2.clone(),
            sets: vec![set(5, 140.0), set(5, 142.5)],
        }],
    });

fn set(reps: u32, weight: f32) -> domain::Set {
    domain::Set {
        reps: reps.into(),
        weight: domain::Weight::new(weight).unwrap(),
    }
}
