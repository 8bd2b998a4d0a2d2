use slotdesk::database::Database;

pub struct TestDatabase {
    db: Database,
    file: String,
}

impl TestDatabase {
    pub fn db(&self) -> Database {
        self.db.clone()
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    let file = format!("test_{}.db", uuid::Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    TestDatabase { db, file }
}

pub async fn teardown_test_db(test_db: TestDatabase) {
    drop(test_db.db);
    let _ = std::fs::remove_file(&test_db.file);
    let _ = std::fs::remove_file(format!("{}-shm", test_db.file));
    let _ = std::fs::remove_file(format!("{}-wal", test_db.file));
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE stores (
            id TEXT PRIMARY KEY,
            domain TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create stores table");

    sqlx::query(
        "CREATE TABLE store_settings (
            store_id TEXT PRIMARY KEY,
            working_hours_start TEXT NOT NULL,
            working_hours_end TEXT NOT NULL,
            open_days TEXT NOT NULL,
            slot_granularity_minutes INTEGER NOT NULL DEFAULT 15,
            use_resources INTEGER NOT NULL DEFAULT 0,
            limit_booking_window INTEGER NOT NULL DEFAULT 0,
            booking_window_days INTEGER NOT NULL DEFAULT 30,
            limit_appointments INTEGER NOT NULL DEFAULT 0,
            max_appointments_displayed INTEGER NOT NULL DEFAULT 50,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create store_settings table");

    sqlx::query(
        "CREATE TABLE services (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            title TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL CHECK(duration_minutes > 0),
            resource_type_id TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create services table");

    sqlx::query(
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            name TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employees table");

    sqlx::query(
        "CREATE TABLE employee_services (
            employee_id TEXT NOT NULL,
            service_id TEXT NOT NULL,
            PRIMARY KEY (employee_id, service_id)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employee_services table");

    sqlx::query(
        "CREATE TABLE day_schedules (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            employee_id TEXT NOT NULL,
            date TEXT NOT NULL,
            slots TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(employee_id, date)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create day_schedules table");

    sqlx::query(
        "CREATE TABLE resource_types (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create resource_types table");

    sqlx::query(
        "CREATE TABLE resources (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            resource_type_id TEXT NOT NULL,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK(quantity >= 1),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create resources table");

    sqlx::query(
        "CREATE TABLE resource_bookings (
            id TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            resource_id TEXT NOT NULL,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create resource_bookings table");

    sqlx::query(
        "CREATE TABLE operator_tokens (
            token TEXT PRIMARY KEY,
            store_id TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create operator_tokens table");
}
