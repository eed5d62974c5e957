// Tests for the mentorship workflow using direct database operations
// (without the HTTP layer). This validates the core business rules.

mod common;

use common::{client::TestClient, TestContext};
use entity::mentorship::MentorshipStatus;
use mentor_match::types::error::AppError;
use mentor_match::types::mentorship::{DBMentorshipRequest, MentorshipRole, PendingCounts};
use sea_orm::Set;
use uuid::Uuid;

fn request_between(mentor_id: Uuid, mentee_id: Uuid) -> DBMentorshipRequest {
    DBMentorshipRequest {
        mentor_id,
        mentee_id,
        mentorship_type: Default::default(),
        request_message: None,
        meeting_frequency: None,
        focus_area_ids: vec![],
    }
}

#[tokio::test]
async fn test_duplicate_open_pair_rejected_in_both_orderings() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;

    ctx.db
        .create_mentorship(request_between(mentor_id, mentee_id))
        .await
        .unwrap();

    let same = ctx
        .db
        .create_mentorship(request_between(mentor_id, mentee_id))
        .await;
    assert!(matches!(same, Err(AppError::AlreadyExists)));

    let swapped = ctx
        .db
        .create_mentorship(request_between(mentee_id, mentor_id))
        .await;
    assert!(matches!(swapped, Err(AppError::AlreadyExists)));

    // Still exactly one row for the pair
    let rows = ctx
        .db
        .list_mentorships_for_user(mentee_id, MentorshipRole::Mentee, None, true)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_self_request_rejected_before_storage() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (user_id, _) = client.create_test_user("Speaker").await;

    let result = ctx
        .db
        .create_mentorship(request_between(user_id, user_id))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_unknown_party_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentee_id, _) = client.create_test_user("Mentee").await;

    let result = ctx
        .db
        .create_mentorship(request_between(Uuid::new_v4(), mentee_id))
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_concurrent_duplicate_requests_one_wins() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;

    // The open-pair unique index backstops the check-then-insert, so exactly
    // one of two simultaneous requests for the same pair may land.
    let (first, second) = tokio::join!(
        ctx.db.create_mentorship(request_between(mentor_id, mentee_id)),
        ctx.db.create_mentorship(request_between(mentee_id, mentor_id)),
    );
    assert!(first.is_ok() != second.is_ok());

    let rows = ctx
        .db
        .list_mentorships_for_user(mentor_id, MentorshipRole::Mentor, None, true)
        .await
        .unwrap()
        .len()
        + ctx
            .db
            .list_mentorships_for_user(mentor_id, MentorshipRole::Mentee, None, true)
            .await
            .unwrap()
            .len();
    assert_eq!(rows, 1);

    println!("✅ Concurrent duplicate request test passed!");
}

#[tokio::test]
async fn test_exists_active_or_pending_lifecycle() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;

    assert!(!ctx
        .db
        .exists_active_or_pending(mentor_id, mentee_id)
        .await
        .unwrap());

    let mentorship = ctx
        .db
        .create_mentorship(request_between(mentor_id, mentee_id))
        .await
        .unwrap();

    // Pending counts, in either ordering
    assert!(ctx
        .db
        .exists_active_or_pending(mentor_id, mentee_id)
        .await
        .unwrap());
    assert!(ctx
        .db
        .exists_active_or_pending(mentee_id, mentor_id)
        .await
        .unwrap());

    // Active still counts
    ctx.db
        .respond_to_mentorship(mentorship.id, mentor_id, true, None)
        .await
        .unwrap();
    assert!(ctx
        .db
        .exists_active_or_pending(mentor_id, mentee_id)
        .await
        .unwrap());

    // Terminal does not, so the pair can request again
    ctx.db
        .complete_mentorship(mentorship.id, mentee_id, None)
        .await
        .unwrap();
    assert!(!ctx
        .db
        .exists_active_or_pending(mentor_id, mentee_id)
        .await
        .unwrap());

    ctx.db
        .create_mentorship(request_between(mentor_id, mentee_id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cancel_mutates_instead_of_deleting() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;
    let mentorship = client.open_request(mentor_id, mentee_id).await;

    ctx.db
        .cancel_mentorship(mentorship.id, mentor_id)
        .await
        .unwrap();

    // History survives: the row is still there, as Cancelled
    let cancelled = ctx.db.get_mentorship(mentorship.id).await.unwrap();
    assert_eq!(cancelled.status, MentorshipStatus::Cancelled);

    let second = ctx.db.cancel_mentorship(mentorship.id, mentor_id).await;
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_complete_rules() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;
    let mentorship = client.open_request(mentor_id, mentee_id).await;

    // Pending cannot complete
    let early = ctx
        .db
        .complete_mentorship(mentorship.id, mentor_id, None)
        .await;
    assert!(matches!(early, Err(AppError::Conflict(_))));

    ctx.db
        .respond_to_mentorship(mentorship.id, mentor_id, true, None)
        .await
        .unwrap();

    // Only the two parties may complete
    let stranger = ctx
        .db
        .complete_mentorship(mentorship.id, Uuid::new_v4(), None)
        .await;
    assert!(matches!(stranger, Err(AppError::Forbidden)));

    let completed = ctx
        .db
        .complete_mentorship(mentorship.id, mentee_id, Some("wrapped up".to_string()))
        .await
        .unwrap();
    assert_eq!(completed.status, MentorshipStatus::Completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.notes.as_deref(), Some("wrapped up"));

    let again = ctx
        .db
        .complete_mentorship(mentorship.id, mentee_id, None)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_complete_appends_to_existing_notes() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;
    let mentorship = client.open_request(mentor_id, mentee_id).await;

    ctx.db
        .respond_to_mentorship(mentorship.id, mentor_id, true, None)
        .await
        .unwrap();

    // Notes written mid-mentorship survive completion
    let active = ctx.db.get_mentorship(mentorship.id).await.unwrap();
    let mut am: entity::mentorship::ActiveModel = active.into();
    am.notes = Set(Some("kickoff call done".to_string()));
    ctx.db.save_mentorship(am).await.unwrap();

    let completed = ctx
        .db
        .complete_mentorship(mentorship.id, mentor_id, Some("final talk reviewed".to_string()))
        .await
        .unwrap();
    assert_eq!(
        completed.notes.as_deref(),
        Some("kickoff call done\nfinal talk reviewed")
    );
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;
    let mentorship = client.open_request(mentor_id, mentee_id).await;

    ctx.db.delete_mentorship(mentorship.id).await.unwrap();
    // Deleting again, or deleting an id that never existed, is still a success
    ctx.db.delete_mentorship(mentorship.id).await.unwrap();
    ctx.db.delete_mentorship(Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_pending_counts_tally() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_a, _) = client.create_test_user("Mentor A").await;
    let (mentor_b, _) = client.create_test_user("Mentor B").await;
    let (mentee, _) = client.create_test_user("Mentee").await;

    client.open_request(mentor_a, mentee).await;
    client.open_request(mentor_b, mentee).await;

    let mentee_counts = ctx.db.count_pending_for_user(mentee).await.unwrap();
    assert_eq!(
        mentee_counts,
        PendingCounts {
            outbound: 2,
            inbound: 0
        }
    );

    let mentor_counts = ctx.db.count_pending_for_user(mentor_a).await.unwrap();
    assert_eq!(
        mentor_counts,
        PendingCounts {
            outbound: 0,
            inbound: 1
        }
    );

    // Accepting one moves it out of the pending tallies
    let pending = ctx
        .db
        .list_mentorships_for_user(mentor_a, MentorshipRole::Mentor, None, false)
        .await
        .unwrap();
    ctx.db
        .respond_to_mentorship(pending[0].id, mentor_a, true, None)
        .await
        .unwrap();

    let mentee_counts = ctx.db.count_pending_for_user(mentee).await.unwrap();
    assert_eq!(
        mentee_counts,
        PendingCounts {
            outbound: 1,
            inbound: 0
        }
    );
}

#[tokio::test]
async fn test_listing_filters_and_ordering() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_a, _) = client.create_test_user("Mentor A").await;
    let (mentor_b, _) = client.create_test_user("Mentor B").await;
    let (mentee, _) = client.create_test_user("Mentee").await;

    let first = client.open_request(mentor_a, mentee).await;
    let second = client.open_request(mentor_b, mentee).await;

    // Newest request first
    let listed = ctx
        .db
        .list_mentorships_for_user(mentee, MentorshipRole::Mentee, None, false)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    // Decline one: it leaves the default view...
    ctx.db
        .respond_to_mentorship(first.id, mentor_a, false, None)
        .await
        .unwrap();
    let open_only = ctx
        .db
        .list_mentorships_for_user(mentee, MentorshipRole::Mentee, None, false)
        .await
        .unwrap();
    assert_eq!(open_only.len(), 1);
    assert_eq!(open_only[0].id, second.id);

    // ...stays visible with include_terminal...
    let with_history = ctx
        .db
        .list_mentorships_for_user(mentee, MentorshipRole::Mentee, None, true)
        .await
        .unwrap();
    assert_eq!(with_history.len(), 2);

    // ...and a concrete status filter overrides include_terminal
    let declined_only = ctx
        .db
        .list_mentorships_for_user(
            mentee,
            MentorshipRole::Mentee,
            Some(MentorshipStatus::Declined),
            false,
        )
        .await
        .unwrap();
    assert_eq!(declined_only.len(), 1);
    assert_eq!(declined_only[0].id, first.id);
}

#[tokio::test]
async fn test_request_with_focus_areas_and_relationships_read() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (mentor_id, _) = client.create_test_user("Mentor").await;
    let (mentee_id, _) = client.create_test_user("Mentee").await;
    let rust = client.create_expertise_area("Rust").await;
    let speaking = client.create_expertise_area("Public Speaking").await;

    let mentorship = ctx
        .db
        .create_mentorship(DBMentorshipRequest {
            mentor_id,
            mentee_id,
            mentorship_type: Default::default(),
            request_message: Some("help wanted".to_string()),
            meeting_frequency: Some("weekly".to_string()),
            focus_area_ids: vec![rust, speaking],
        })
        .await
        .unwrap();

    let detail = ctx
        .db
        .get_mentorship_with_relationships(mentorship.id)
        .await
        .unwrap();
    assert_eq!(detail.mentor.id, mentor_id);
    assert_eq!(detail.mentee.id, mentee_id);
    assert_eq!(detail.focus_areas.len(), 2);

    // Unknown focus areas poison the whole creation, nothing is left behind
    let (mentor_2, _) = client.create_test_user("Second Mentor").await;
    let (mentee_2, _) = client.create_test_user("Second Mentee").await;
    let bad = ctx
        .db
        .create_mentorship(DBMentorshipRequest {
            mentor_id: mentor_2,
            mentee_id: mentee_2,
            mentorship_type: Default::default(),
            request_message: None,
            meeting_frequency: None,
            focus_area_ids: vec![Uuid::new_v4()],
        })
        .await;
    assert!(matches!(bad, Err(AppError::BadRequest(_))));
    assert!(!ctx
        .db
        .exists_active_or_pending(mentor_2, mentee_2)
        .await
        .unwrap());
}
