//! Then steps for todo paging BDD scenarios.

use super::world::TodoPagingWorld;
use rstest_bdd_macros::then;
use todos::todo::domain::TodoDomainError;

#[then("the store holds {count:usize} todos")]
fn store_holds(world: &TodoPagingWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.board.store().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} todos, found {held}"));
    }
    Ok(())
}

#[then("every todo is incomplete")]
fn every_todo_incomplete(world: &TodoPagingWorld) -> Result<(), eyre::Report> {
    if let Some(todo) = world
        .board
        .store()
        .todos()
        .iter()
        .find(|todo| todo.is_completed())
    {
        return Err(eyre::eyre!("todo {} is completed", todo.id()));
    }
    Ok(())
}

#[then("paging has stopped")]
fn paging_stopped(world: &TodoPagingWorld) -> Result<(), eyre::Report> {
    if world.board.pagination().has_more() {
        return Err(eyre::eyre!("expected paging to have stopped"));
    }
    Ok(())
}

#[then("the request is suppressed")]
fn request_suppressed(world: &TodoPagingWorld) -> Result<(), eyre::Report> {
    match &world.last_load {
        Some(None) => Ok(()),
        other => Err(eyre::eyre!("expected a suppressed request, got {other:?}")),
    }
}

#[then(r#"the last visible todo is titled "{title}""#)]
fn last_visible_titled(world: &TodoPagingWorld, title: String) -> Result<(), eyre::Report> {
    let visible = world.board.visible();
    let last = visible
        .last()
        .ok_or_else(|| eyre::eyre!("visible list is empty"))?;
    if last.title() != title || !last.id().is_local() {
        return Err(eyre::eyre!(
            "expected local todo \"{title}\" last, found {} \"{}\"",
            last.id(),
            last.title()
        ));
    }
    Ok(())
}

#[then("the creation fails with an empty title error")]
fn creation_fails_with_empty_title(world: &TodoPagingWorld) -> Result<(), eyre::Report> {
    match &world.last_create {
        Some(Err(TodoDomainError::EmptyTitle)) => Ok(()),
        other => Err(eyre::eyre!("expected EmptyTitle error, got {other:?}")),
    }
}
