//! Path contracts for the sibling accessors
//!
//! Projects get the exhaustive treatment in `projects.rs`; these suites pin
//! the verb and path template of every other accessor method, sharing one
//! recorded dispatcher per resource.

mod common;

use asana::resources::{Attachments, Stories, Tags, Tasks, Teams, Users, Workspaces};
use common::{Call, RecordingDispatcher};
use serde_json::json;
use tokio_test::block_on;

fn get(path: &str) -> Call {
    Call::Get {
        path: path.to_string(),
        params: None,
    }
}

fn post(path: &str, data: serde_json::Value) -> Call {
    Call::Post {
        path: path.to_string(),
        data,
    }
}

#[test]
fn task_crud_paths() {
    let dispatcher = RecordingDispatcher::new();
    let tasks = Tasks::new(&dispatcher);
    let data = json!({ "name": "Fix login" });

    block_on(tasks.create(&data)).unwrap();
    block_on(tasks.create_in_workspace(7, &data)).unwrap();
    block_on(tasks.find_all(None)).unwrap();
    block_on(tasks.find_by_id(42, None)).unwrap();
    block_on(tasks.find_by_project(5, None)).unwrap();
    block_on(tasks.find_by_tag("5", None)).unwrap();
    block_on(tasks.update(42, &data)).unwrap();
    block_on(tasks.delete(42)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            post("/tasks", data.clone()),
            post("/workspaces/7/tasks", data.clone()),
            get("/tasks"),
            get("/tasks/42"),
            get("/projects/5/tasks"),
            get("/tags/5/tasks"),
            Call::Put { path: "/tasks/42".to_string(), data: data.clone() },
            Call::Delete { path: "/tasks/42".to_string() },
        ]
    );
}

#[test]
fn task_membership_paths() {
    let dispatcher = RecordingDispatcher::new();
    let tasks = Tasks::new(&dispatcher);
    let data = json!({ "project": 5 });

    block_on(tasks.subtasks(42, None)).unwrap();
    block_on(tasks.projects(42, None)).unwrap();
    block_on(tasks.add_project(42, &data)).unwrap();
    block_on(tasks.remove_project(42, &data)).unwrap();
    block_on(tasks.tags(42, None)).unwrap();
    block_on(tasks.add_tag(42, &data)).unwrap();
    block_on(tasks.remove_tag(42, &data)).unwrap();
    block_on(tasks.add_followers(42, &data)).unwrap();
    block_on(tasks.remove_followers(42, &data)).unwrap();
    block_on(tasks.set_parent(42, &data)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            get("/tasks/42/subtasks"),
            get("/tasks/42/projects"),
            post("/tasks/42/addProject", data.clone()),
            post("/tasks/42/removeProject", data.clone()),
            get("/tasks/42/tags"),
            post("/tasks/42/addTag", data.clone()),
            post("/tasks/42/removeTag", data.clone()),
            post("/tasks/42/addFollowers", data.clone()),
            post("/tasks/42/removeFollowers", data.clone()),
            post("/tasks/42/setParent", data.clone()),
        ]
    );
}

#[test]
fn user_paths() {
    let dispatcher = RecordingDispatcher::new();
    let users = Users::new(&dispatcher);

    block_on(users.me(None)).unwrap();
    block_on(users.find_by_id(9, None)).unwrap();
    block_on(users.find_by_workspace("1", None)).unwrap();
    block_on(users.find_all(None)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            get("/users/me"),
            get("/users/9"),
            get("/workspaces/1/users"),
            get("/users"),
        ]
    );
}

#[test]
fn workspace_paths() {
    let dispatcher = RecordingDispatcher::new();
    let workspaces = Workspaces::new(&dispatcher);
    let data = json!({ "name": "Renamed workspace" });

    block_on(workspaces.find_all(None)).unwrap();
    block_on(workspaces.find_by_id(14916, None)).unwrap();
    block_on(workspaces.update(14916, &data)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            get("/workspaces"),
            get("/workspaces/14916"),
            Call::Put { path: "/workspaces/14916".to_string(), data },
        ]
    );
}

#[test]
fn tag_paths() {
    let dispatcher = RecordingDispatcher::new();
    let tags = Tags::new(&dispatcher);
    let data = json!({ "name": "bug" });

    block_on(tags.create(&data)).unwrap();
    block_on(tags.create_in_workspace(7, &data)).unwrap();
    block_on(tags.find_all(None)).unwrap();
    block_on(tags.find_by_id(3, None)).unwrap();
    block_on(tags.find_by_workspace(7, None)).unwrap();
    block_on(tags.update(3, &data)).unwrap();
    block_on(tags.delete(3)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            post("/tags", data.clone()),
            post("/workspaces/7/tags", data.clone()),
            get("/tags"),
            get("/tags/3"),
            get("/workspaces/7/tags"),
            Call::Put { path: "/tags/3".to_string(), data: data.clone() },
            Call::Delete { path: "/tags/3".to_string() },
        ]
    );
}

#[test]
fn story_paths() {
    let dispatcher = RecordingDispatcher::new();
    let stories = Stories::new(&dispatcher);
    let comment = json!({ "text": "ship it" });

    block_on(stories.find_by_id(8, None)).unwrap();
    block_on(stories.find_by_task(42, None)).unwrap();
    block_on(stories.create_on_task(42, &comment)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            get("/stories/8"),
            get("/tasks/42/stories"),
            post("/tasks/42/stories", comment),
        ]
    );
}

#[test]
fn team_paths() {
    let dispatcher = RecordingDispatcher::new();
    let teams = Teams::new(&dispatcher);

    block_on(teams.find_by_id(11, None)).unwrap();
    block_on(teams.find_by_organization(14916, None)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![get("/teams/11"), get("/organizations/14916/teams")]
    );
}

#[test]
fn attachment_paths() {
    let dispatcher = RecordingDispatcher::new();
    let attachments = Attachments::new(&dispatcher);

    block_on(attachments.find_by_id(6, None)).unwrap();
    block_on(attachments.find_by_task(42, None)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![get("/attachments/6"), get("/tasks/42/attachments")]
    );
}

#[test]
fn non_numeric_ids_coerce_to_nan_everywhere() {
    let dispatcher = RecordingDispatcher::new();

    block_on(Tasks::new(&dispatcher).find_by_id("foobar", None)).unwrap();
    block_on(Users::new(&dispatcher).find_by_id("foobar", None)).unwrap();
    block_on(Tags::new(&dispatcher).delete("foobar")).unwrap();
    block_on(Stories::new(&dispatcher).find_by_task("foobar", None)).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![
            get("/tasks/NaN"),
            get("/users/NaN"),
            Call::Delete { path: "/tags/NaN".to_string() },
            get("/tasks/NaN/stories"),
        ]
    );
}

#[test]
fn params_forward_through_sibling_reads() {
    let dispatcher = RecordingDispatcher::new();
    let tasks = Tasks::new(&dispatcher);

    let mut params = asana::Params::new();
    params.insert("opt_fields".to_string(), json!("id,name,completed"));

    block_on(tasks.find_by_project(5, Some(&params))).unwrap();

    assert_eq!(
        dispatcher.calls(),
        vec![Call::Get {
            path: "/projects/5/tasks".to_string(),
            params: Some(params),
        }]
    );
}
