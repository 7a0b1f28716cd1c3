//! When steps for todo paging BDD scenarios.

use super::world::{TodoPagingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the first page is loaded")]
fn first_page_loaded(world: &mut TodoPagingWorld) {
    world.last_load = Some(run_async(world.board.load_initial()));
}

#[when("the next page is loaded")]
fn next_page_loaded(world: &mut TodoPagingWorld) {
    world.last_load = Some(run_async(world.board.load_more()));
}

#[when("the list is refreshed")]
fn list_refreshed(world: &mut TodoPagingWorld) {
    world.last_load = Some(run_async(world.board.refresh()));
}

#[when("the remote source recovers")]
fn source_recovers(world: &mut TodoPagingWorld) -> Result<(), eyre::Report> {
    world.source.heal().wrap_err("heal remote source")
}

#[when(r#"a todo titled "{title}" is created"#)]
fn todo_created(world: &mut TodoPagingWorld, title: String) {
    world.last_create = Some(world.board.create(&title));
}
