//! Database-level tests for ticket numbering, task lifecycle writes, and
//! the customer ticket aggregation.

use chrono::Utc;
use orca_core::status::TaskStatus;
use orca_core::task_lifecycle::TaskUpdatePlan;
use orca_core::ticket_number;
use orca_db::models::customer::{NewCustomer, UpdateCustomer};
use orca_db::repositories::ticket_repo::NewTicket;
use orca_db::repositories::{CustomerRepo, TaskRepo, TicketRepo};
use sqlx::PgPool;

fn customer_fixture(email: &str) -> NewCustomer {
    NewCustomer {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        unit: None,
        street: Some("12 Analytical Way".to_string()),
        city: Some("London".to_string()),
        postal_code: None,
        phone_number: None,
        status: "current".to_string(),
    }
}

fn ticket_fixture(customer_id: i64, ticket_number: &str) -> NewTicket {
    NewTicket {
        customer_id,
        subject: "No signal on boot".to_string(),
        description: None,
        priority: "normal".to_string(),
        ticket_number: ticket_number.to_string(),
        ticket_type_id: 1,
        device_id: None,
        due_at: None,
        completed_at: None,
    }
}

async fn seed_ticket_type(pool: &PgPool) {
    sqlx::query("INSERT INTO ticket_type (id, name) VALUES (1, 'Repair')")
        .execute(pool)
        .await
        .expect("seed ticket type");
}

// ---------------------------------------------------------------------------
// Ticket numbering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn candidate_number_is_idempotent_until_insert(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let count_a = TicketRepo::count_created_on(&pool, today).await.unwrap();
    let count_b = TicketRepo::count_created_on(&pool, today).await.unwrap();
    assert_eq!(count_a, count_b, "reads without writes must agree");

    let first = ticket_number::candidate(today, count_a);
    TicketRepo::create(&pool, &ticket_fixture(customer.id, &first))
        .await
        .unwrap();

    let count_after = TicketRepo::count_created_on(&pool, today).await.unwrap();
    assert_eq!(count_after, count_a + 1);
    assert_ne!(ticket_number::candidate(today, count_after), first);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_ticket_number_fails_the_insert(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();

    let fixture = ticket_fixture(customer.id, "OIT_20250101_001");
    TicketRepo::create(&pool, &fixture).await.unwrap();

    // Same number again: the unique constraint must reject it rather than
    // silently overwriting.
    let err = TicketRepo::create(&pool, &fixture).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_ticket_ticket_number"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Task lifecycle writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn completion_stamps_minutes_and_timestamp(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();
    let ticket_id = TicketRepo::create(&pool, &ticket_fixture(customer.id, "OIT_20250101_001"))
        .await
        .unwrap();
    let task_id = TaskRepo::create(&pool, ticket_id, None, "replace PSU", TaskStatus::InProgress)
        .await
        .unwrap();

    let before = Utc::now();
    let plan = TaskUpdatePlan::RecordCompletion {
        minutes: 45,
        notes: None,
    };
    assert!(TaskRepo::apply_update(&pool, task_id, &plan).await.unwrap());

    let task = TaskRepo::find_by_id(&pool, task_id).await.unwrap().unwrap();
    assert_eq!(task.status, "Completed");
    assert_eq!(task.minutes, 45);
    let completed_at = task.completed_at.expect("completed_at must be stamped");
    assert!(completed_at >= before - chrono::Duration::seconds(1));
}

#[sqlx::test(migrations = "./migrations")]
async fn leaving_completed_retains_the_stamp(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();
    let ticket_id = TicketRepo::create(&pool, &ticket_fixture(customer.id, "OIT_20250101_001"))
        .await
        .unwrap();
    let task_id = TaskRepo::create(&pool, ticket_id, None, "replace PSU", TaskStatus::NotStarted)
        .await
        .unwrap();

    let complete = TaskUpdatePlan::RecordCompletion {
        minutes: 10,
        notes: None,
    };
    TaskRepo::apply_update(&pool, task_id, &complete)
        .await
        .unwrap();
    let stamped = TaskRepo::find_by_id(&pool, task_id)
        .await
        .unwrap()
        .unwrap()
        .completed_at
        .unwrap();

    // Reopen the task. The last completion timestamp stays.
    let reopen = TaskUpdatePlan::EditFields {
        task_description: "replace PSU".to_string(),
        task_type_id: None,
        minutes: 10,
        status: TaskStatus::InProgress,
        notes: None,
    };
    TaskRepo::apply_update(&pool, task_id, &reopen)
        .await
        .unwrap();

    let task = TaskRepo::find_by_id(&pool, task_id).await.unwrap().unwrap();
    assert_eq!(task.status, "In Progress");
    assert_eq!(task.completed_at, Some(stamped));
}

#[sqlx::test(migrations = "./migrations")]
async fn updating_a_missing_task_reports_no_rows(pool: PgPool) {
    let plan = TaskUpdatePlan::RecordCompletion {
        minutes: 0,
        notes: None,
    };
    assert!(!TaskRepo::apply_update(&pool, 999_999, &plan).await.unwrap());
}

// ---------------------------------------------------------------------------
// Customer ticket aggregation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn aggregation_buckets_by_status(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();
    // A second customer with no tickets at all.
    let empty = CustomerRepo::create(&pool, &customer_fixture("grace@example.com"))
        .await
        .unwrap();

    for (i, status) in ["pending", "closed", "closed"].iter().enumerate() {
        let number = format!("OIT_20250101_{:03}", i + 1);
        let id = TicketRepo::create(&pool, &ticket_fixture(customer.id, &number))
            .await
            .unwrap();
        sqlx::query("UPDATE ticket SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&pool)
            .await
            .unwrap();
    }

    let rows = CustomerRepo::list_with_ticket_counts(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);

    let busy = rows.iter().find(|r| r.id == customer.id).unwrap();
    assert_eq!(busy.total_tickets, 3);
    assert_eq!(busy.pending_tickets, 1);
    assert_eq!(busy.waiting_tickets, 0);
    assert_eq!(busy.in_progress_tickets, 0);
    assert_eq!(busy.closed_tickets, 2);
    assert_eq!(busy.ready_tickets, 0);

    let idle = rows.iter().find(|r| r.id == empty.id).unwrap();
    assert_eq!(idle.total_tickets, 0);
    assert_eq!(idle.pending_tickets, 0);
    assert_eq!(idle.waiting_tickets, 0);
    assert_eq!(idle.in_progress_tickets, 0);
    assert_eq!(idle.closed_tickets, 0);
    assert_eq!(idle.ready_tickets, 0);
}

// ---------------------------------------------------------------------------
// Cascade behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_customer_cascades_to_tickets_and_tasks(pool: PgPool) {
    seed_ticket_type(&pool).await;
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();
    let ticket_id = TicketRepo::create(&pool, &ticket_fixture(customer.id, "OIT_20250101_001"))
        .await
        .unwrap();
    let task_id = TaskRepo::create(&pool, ticket_id, None, "inspect", TaskStatus::NotStarted)
        .await
        .unwrap();

    assert!(CustomerRepo::delete(&pool, customer.id).await.unwrap());
    assert!(TicketRepo::find_by_id(&pool, ticket_id)
        .await
        .unwrap()
        .is_none());
    assert!(TaskRepo::find_by_id(&pool, task_id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn customer_update_keeps_omitted_fields(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &customer_fixture("ada@example.com"))
        .await
        .unwrap();

    let update = UpdateCustomer {
        first_name: None,
        last_name: None,
        email: None,
        phone_number: Some("555-0199".to_string()),
        status: Some("inactive".to_string()),
        unit: None,
        street: None,
        city: None,
        postal_code: None,
    };
    let updated = CustomerRepo::update(&pool, customer.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.phone_number.as_deref(), Some("555-0199"));
    assert_eq!(updated.status, "inactive");
    assert_eq!(updated.street.as_deref(), Some("12 Analytical Way"));
}
