use std::time::Duration;

use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the shared pool. `build_unchecked` keeps startup alive while the database is
/// still coming up; individual requests surface connectivity failures as store errors.
pub fn establish_connection(database_url: &str, max_connections: u32) -> PgPoolSquad {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_connections)
        .connection_timeout(CONNECTION_TIMEOUT)
        .build_unchecked(manager)
}
