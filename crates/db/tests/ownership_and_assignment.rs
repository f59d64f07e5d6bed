//! Integration tests for users, projects and labour assignments.
//!
//! Exercises the repository layer against a real database:
//! - Get-or-create users by phone
//! - Project ownership checks
//! - Idempotent assignment and removal
//! - Cascade behaviour on project delete

use rust_decimal_macros::dec;
use sqlx::PgPool;
use thekedar_db::models::labour::{CreateLabour, UpdateLabour};
use thekedar_db::models::project::{CreateProject, UpdateProject};
use thekedar_db::repositories::{LabourRepo, ProjectRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
    }
}

fn new_labour(name: &str) -> CreateLabour {
    CreateLabour {
        name: name.to_string(),
        phone: None,
        daily_wage: dec!(800.00),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_or_create_returns_same_user_for_same_phone(pool: PgPool) {
    let (first, created) = UserRepo::get_or_create(&pool, "9876543210").await.unwrap();
    assert!(created);

    let (second, created_again) = UserRepo::get_or_create(&pool, "9876543210").await.unwrap();
    assert!(!created_again);
    assert_eq!(first.id, second.id);

    let found = UserRepo::find_by_phone(&pool, "9876543210").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(first.id));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn is_owner_distinguishes_users(pool: PgPool) {
    let (alice, _) = UserRepo::get_or_create(&pool, "9000000001").await.unwrap();
    let (bob, _) = UserRepo::get_or_create(&pool, "9000000002").await.unwrap();
    let project = ProjectRepo::create(&pool, alice.id, &new_project("Site A"))
        .await
        .unwrap();

    assert!(ProjectRepo::is_owner(&pool, project.id, alice.id).await.unwrap());
    assert!(!ProjectRepo::is_owner(&pool, project.id, bob.id).await.unwrap());
    assert!(!ProjectRepo::is_owner(&pool, uuid::Uuid::new_v4(), alice.id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_owner_only_returns_own_projects(pool: PgPool) {
    let (alice, _) = UserRepo::get_or_create(&pool, "9000000001").await.unwrap();
    let (bob, _) = UserRepo::get_or_create(&pool, "9000000002").await.unwrap();
    ProjectRepo::create(&pool, alice.id, &new_project("A1")).await.unwrap();
    ProjectRepo::create(&pool, alice.id, &new_project("A2")).await.unwrap();
    ProjectRepo::create(&pool, bob.id, &new_project("B1")).await.unwrap();

    let projects = ProjectRepo::list_by_owner(&pool, alice.id).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p.user_id == alice.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_returns_none(pool: PgPool) {
    let update = UpdateProject {
        name: "Renamed".to_string(),
        description: Some("new".to_string()),
    };
    let result = ProjectRepo::update(&pool, uuid::Uuid::new_v4(), &update)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Labours and assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn labours_are_listed_by_name(pool: PgPool) {
    LabourRepo::create(&pool, &new_labour("Suresh")).await.unwrap();
    LabourRepo::create(&pool, &new_labour("Anil")).await.unwrap();
    LabourRepo::create(&pool, &new_labour("Mohan")).await.unwrap();

    let names: Vec<String> = LabourRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, ["Anil", "Mohan", "Suresh"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_labour_keeps_exact_wage(pool: PgPool) {
    let labour = LabourRepo::create(&pool, &new_labour("Ramesh")).await.unwrap();
    let update = UpdateLabour {
        name: "Ramesh K".to_string(),
        phone: Some("9812345678".to_string()),
        daily_wage: dec!(1234.56),
    };
    let updated = LabourRepo::update(&pool, labour.id, &update)
        .await
        .unwrap()
        .expect("labour should exist");
    assert_eq!(updated.name, "Ramesh K");
    assert_eq!(updated.daily_wage, dec!(1234.56));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assigning_twice_is_idempotent(pool: PgPool) {
    let (user, _) = UserRepo::get_or_create(&pool, "9000000001").await.unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Site")).await.unwrap();
    let labour = LabourRepo::create(&pool, &new_labour("Ramesh")).await.unwrap();

    assert!(LabourRepo::assign_to_project(&pool, project.id, labour.id)
        .await
        .unwrap());
    assert!(!LabourRepo::assign_to_project(&pool, project.id, labour.id)
        .await
        .unwrap());

    let assigned = LabourRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert!(LabourRepo::is_assigned(&pool, project.id, labour.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removing_unassigned_labour_reports_nothing_removed(pool: PgPool) {
    let (user, _) = UserRepo::get_or_create(&pool, "9000000001").await.unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Site")).await.unwrap();
    let labour = LabourRepo::create(&pool, &new_labour("Ramesh")).await.unwrap();

    assert!(!LabourRepo::remove_from_project(&pool, project.id, labour.id)
        .await
        .unwrap());

    LabourRepo::assign_to_project(&pool, project.id, labour.id)
        .await
        .unwrap();
    assert!(LabourRepo::remove_from_project(&pool, project.id, labour.id)
        .await
        .unwrap());
    assert!(!LabourRepo::is_assigned(&pool, project.id, labour.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_project_keeps_labourers(pool: PgPool) {
    let (user, _) = UserRepo::get_or_create(&pool, "9000000001").await.unwrap();
    let project = ProjectRepo::create(&pool, user.id, &new_project("Site")).await.unwrap();
    let labour = LabourRepo::create(&pool, &new_labour("Ramesh")).await.unwrap();
    LabourRepo::assign_to_project(&pool, project.id, labour.id)
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(LabourRepo::find_by_id(&pool, labour.id).await.unwrap().is_some());
    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM project_labours")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
