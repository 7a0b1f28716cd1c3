//! Given steps for todo paging BDD scenarios.

use std::num::NonZeroU32;

use super::world::TodoPagingWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todos::todo::adapters::memory::InMemoryTodoSource;

#[given("a remote source with {count:u64} todos served {size:u32} per page")]
fn remote_source(
    world: &mut TodoPagingWorld,
    count: u64,
    size: u32,
) -> Result<(), eyre::Report> {
    let page_size =
        NonZeroU32::new(size).ok_or_else(|| eyre::eyre!("page size must be positive"))?;
    *world = TodoPagingWorld::with_source(InMemoryTodoSource::generated(count), page_size);
    Ok(())
}

#[given("page {page:u32} of the remote source fails")]
fn page_fails(world: &mut TodoPagingWorld, page: u32) -> Result<(), eyre::Report> {
    world
        .source
        .fail_page(page, "simulated outage")
        .wrap_err("script page failure")
}
