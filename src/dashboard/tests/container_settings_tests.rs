use super::*;
use crate::api::fake::{container, InMemoryApi};
use crate::api::error::ApiError;
use crate::dashboard::toast::ToastKind;

#[test]
fn test_merge_overrides_only_requested_flag() {
    let c = container("abc", "web", true, false);
    assert_eq!(
        merge_settings(&c, NotifyFlag::OnFailure, true),
        ContainerSettings {
            notify_on_success: true,
            notify_on_failure: true
        }
    );
    assert_eq!(
        merge_settings(&c, NotifyFlag::OnSuccess, false),
        ContainerSettings {
            notify_on_success: false,
            notify_on_failure: false
        }
    );
}

#[test]
fn test_update_flag_preserves_other_flag() {
    let api = InMemoryApi::new().with_containers(vec![container("abc", "web", true, false)]);

    let saved = update_flag(&api, "abc", NotifyFlag::OnFailure, true).unwrap();
    assert!(saved.notify_on_success);
    assert!(saved.notify_on_failure);

    assert_eq!(api.calls(), vec!["GET /containers/abc", "PUT /containers/abc"]);
    assert_eq!(api.container_updates(), vec![("abc".to_string(), saved)]);

    let after = api.container("abc").unwrap();
    assert!(after.notify_on_success);
    assert!(after.notify_on_failure);
}

#[test]
fn test_update_flag_stops_when_fetch_fails() {
    let api = InMemoryApi::new().with_containers(vec![container("abc", "web", true, false)]);
    api.fail("GET /containers/abc", ApiError::Transport("connection reset".into()));

    let result = update_flag(&api, "abc", NotifyFlag::OnSuccess, false);
    assert!(matches!(result, Err(ApiError::Transport(_))));
    assert!(api.container_updates().is_empty());
    assert_eq!(saved_notice(&result).message, "Failed to update container settings");
    assert_eq!(saved_notice(&result).kind, ToastKind::Error);
}

#[test]
fn test_update_flag_put_failure_reported() {
    let api = InMemoryApi::new().with_containers(vec![container("abc", "web", false, false)]);
    api.fail(
        "PUT /containers/abc",
        ApiError::Status {
            code: 500,
            message: "database is locked".into(),
        },
    );

    let result = update_flag(&api, "abc", NotifyFlag::OnSuccess, true);
    assert!(result.is_err());
    assert_eq!(api.calls().len(), 2);
}

#[test]
fn test_success_notice() {
    let notice = saved_notice(&Ok(ContainerSettings {
        notify_on_success: true,
        notify_on_failure: false,
    }));
    assert_eq!(notice, Notice::success("Container settings updated"));
}

#[test]
fn test_flag_accessors() {
    let mut c = container("abc", "web", false, false);
    NotifyFlag::OnSuccess.set(&mut c, true);
    assert!(NotifyFlag::OnSuccess.get(&c));
    assert!(!NotifyFlag::OnFailure.get(&c));
    assert_eq!(NotifyFlag::OnFailure.field(), "notify_on_failure");
}
