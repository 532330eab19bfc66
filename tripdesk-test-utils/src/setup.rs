use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_EVENT_ID, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its
    /// fields. This allows conversion to AppState without creating a
    /// circular dependency between the test-utils crate and the main crate.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, i32)>,
    {
        T::from((self.state.db.clone(), TEST_EVENT_ID))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    /// Runs the real migrations against the in-memory SQLite database so
    /// tests exercise the same schema as production, including the
    /// uniqueness indexes the registration and assignment invariants rely on.
    pub async fn with_schema(self) -> Result<Self, TestError> {
        Migrator::up(&self.state.db, None).await?;

        Ok(self)
    }
}

#[macro_export]
macro_rules! test_setup_with_schema {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            let setup = setup.with_schema().await?;

            Ok::<_, $crate::TestError>(setup)
        }
        .await
    }};
}
