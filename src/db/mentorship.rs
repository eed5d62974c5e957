use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::mentorship::{
    DBMentorshipRequest, MentorshipRole, MentorshipWithRelations, PendingCounts,
};
use crate::utils::token;
use chrono::Utc;
use entity::mentorship::{
    ActiveModel as MentorshipActive, Column, Entity as Mentorship, MentorshipStatus,
    Model as MentorshipModel,
};
use entity::mentorship_focus_area::ActiveModel as FocusLinkActive;
use entity::mentorship_focus_area::Entity as FocusLink;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, TryIntoModel,
};
use uuid::Uuid;

impl PostgresService {
    /// Open a mentorship request: mentee asks mentor. The duplicate check and
    /// the insert (record + focus-area links) run in one transaction; the
    /// partial unique index on the open pair backstops concurrent requests.
    pub async fn create_mentorship(
        &self,
        payload: DBMentorshipRequest,
    ) -> Result<MentorshipModel, AppError> {
        if payload.mentor_id == payload.mentee_id {
            return Err(AppError::Validation(
                "mentor and mentee must be different users".to_string(),
            ));
        }
        // Validate related records so we can send domain errors instead of 500s
        self.get_user_by_id(&payload.mentor_id).await?;
        self.get_user_by_id(&payload.mentee_id).await?;

        let id = token::new_id();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        if Self::open_pair_exists(&txn, payload.mentor_id, payload.mentee_id).await? {
            txn.rollback().await?;
            return Err(AppError::AlreadyExists);
        }

        let insert = Mentorship::insert(MentorshipActive {
            id: Set(id),
            mentor_id: Set(payload.mentor_id),
            mentee_id: Set(payload.mentee_id),
            mentorship_type: Set(payload.mentorship_type),
            status: Set(MentorshipStatus::Pending),
            request_message: Set(payload.request_message),
            response_message: Set(None),
            notes: Set(None),
            meeting_frequency: Set(payload.meeting_frequency),
            requested_at: Set(now),
            responded_at: Set(None),
            started_at: Set(None),
            completed_at: Set(None),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await;

        if let Err(err) = insert {
            txn.rollback().await?;
            if let Some(sql_err) = err.sql_err() {
                return match sql_err {
                    // Lost the race on the open-pair index: same answer as the pre-check.
                    SqlErr::UniqueConstraintViolation(_) => Err(AppError::AlreadyExists),
                    SqlErr::ForeignKeyConstraintViolation(_) => {
                        Err(AppError::BadRequest("Related record missing".to_string()))
                    }
                    _ => Err(err.into()),
                };
            }
            return Err(err.into());
        }

        for area_id in &payload.focus_area_ids {
            FocusLink::insert(FocusLinkActive {
                mentorship_id: Set(id),
                expertise_area_id: Set(*area_id),
                created_at: Set(now),
            })
            .exec(&txn)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    AppError::BadRequest("Unknown focus area".to_string())
                }
                _ => err.into(),
            })?;
        }

        txn.commit().await?;
        self.get_mentorship(id).await
    }

    pub async fn get_mentorship(&self, id: Uuid) -> Result<MentorshipModel, AppError> {
        Ok(Mentorship::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Mentorship not found".into()))?)
    }

    pub async fn get_mentorship_with_relationships(
        &self,
        id: Uuid,
    ) -> Result<MentorshipWithRelations, AppError> {
        let mentorship = self.get_mentorship(id).await?;
        let mentor = self.get_user_by_id(&mentorship.mentor_id).await?;
        let mentee = self.get_user_by_id(&mentorship.mentee_id).await?;
        let focus_areas = self.list_focus_areas(id).await?;
        Ok(MentorshipWithRelations {
            mentorship,
            mentor: mentor.into(),
            mentee: mentee.into(),
            focus_areas,
        })
    }

    pub async fn list_mentorships_for_user(
        &self,
        user_id: Uuid,
        role: MentorshipRole,
        status: Option<MentorshipStatus>,
        include_terminal: bool,
    ) -> Result<Vec<MentorshipModel>, AppError> {
        let mut query = Mentorship::find().filter(match role {
            MentorshipRole::Mentor => Column::MentorId.eq(user_id),
            MentorshipRole::Mentee => Column::MenteeId.eq(user_id),
        });
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        } else if !include_terminal {
            query = query.filter(
                Column::Status.is_in([MentorshipStatus::Pending, MentorshipStatus::Active]),
            );
        }
        Ok(query
            .order_by_desc(Column::RequestedAt)
            .all(&self.database_connection)
            .await?)
    }

    /// Pending tally: outbound = requests the user sent (as mentee),
    /// inbound = requests waiting on the user (as mentor).
    pub async fn count_pending_for_user(&self, user_id: Uuid) -> Result<PendingCounts, AppError> {
        let outbound = Mentorship::find()
            .filter(Column::MenteeId.eq(user_id))
            .filter(Column::Status.eq(MentorshipStatus::Pending))
            .count(&self.database_connection)
            .await?;
        let inbound = Mentorship::find()
            .filter(Column::MentorId.eq(user_id))
            .filter(Column::Status.eq(MentorshipStatus::Pending))
            .count(&self.database_connection)
            .await?;
        Ok(PendingCounts { outbound, inbound })
    }

    pub async fn exists_active_or_pending(&self, a: Uuid, b: Uuid) -> Result<bool, AppError> {
        Self::open_pair_exists(&self.database_connection, a, b).await
    }

    async fn open_pair_exists<C: ConnectionTrait>(
        conn: &C,
        a: Uuid,
        b: Uuid,
    ) -> Result<bool, AppError> {
        Ok(Mentorship::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::MentorId.eq(a))
                            .add(Column::MenteeId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(Column::MentorId.eq(b))
                            .add(Column::MenteeId.eq(a)),
                    ),
            )
            .filter(Column::Status.is_in([MentorshipStatus::Pending, MentorshipStatus::Active]))
            .count(conn)
            .await?
            > 0)
    }

    /// Mentor accepts or declines a pending request.
    pub async fn respond_to_mentorship(
        &self,
        id: Uuid,
        acting_user: Uuid,
        accepted: bool,
        message: Option<String>,
    ) -> Result<MentorshipModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let mentorship = Mentorship::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound("Mentorship not found".into()))?;

        if mentorship.mentor_id != acting_user {
            txn.rollback().await?;
            return Err(AppError::Forbidden);
        }

        let next = if accepted {
            MentorshipStatus::Active
        } else {
            MentorshipStatus::Declined
        };
        if !mentorship.status.can_transition_to(next) {
            txn.rollback().await?;
            return Err(AppError::Conflict(format!(
                "cannot respond to a mentorship in status {:?}",
                mentorship.status
            )));
        }

        let now = Utc::now();
        let mut am: MentorshipActive = mentorship.into();
        am.status = Set(next);
        am.responded_at = Set(Some(now));
        am.response_message = Set(message);
        if accepted {
            am.started_at = Set(Some(now));
        }
        am.updated_at = Set(now);
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Either party withdraws an open mentorship. The row stays, as history.
    pub async fn cancel_mentorship(
        &self,
        id: Uuid,
        acting_user: Uuid,
    ) -> Result<MentorshipModel, AppError> {
        let mentorship = self.get_mentorship(id).await?;
        if mentorship.mentor_id != acting_user && mentorship.mentee_id != acting_user {
            return Err(AppError::Forbidden);
        }
        if !mentorship.status.can_transition_to(MentorshipStatus::Cancelled) {
            return Err(AppError::Conflict(format!(
                "cannot cancel a mentorship in status {:?}",
                mentorship.status
            )));
        }
        let mut am: MentorshipActive = mentorship.into();
        am.status = Set(MentorshipStatus::Cancelled);
        am.updated_at = Set(Utc::now());
        self.save_mentorship(am).await
    }

    /// Either party marks an active mentorship as finished.
    pub async fn complete_mentorship(
        &self,
        id: Uuid,
        acting_user: Uuid,
        notes: Option<String>,
    ) -> Result<MentorshipModel, AppError> {
        let mentorship = self.get_mentorship(id).await?;
        if mentorship.mentor_id != acting_user && mentorship.mentee_id != acting_user {
            return Err(AppError::Forbidden);
        }
        if !mentorship.status.can_transition_to(MentorshipStatus::Completed) {
            return Err(AppError::Conflict(format!(
                "cannot complete a mentorship in status {:?}",
                mentorship.status
            )));
        }
        let now = Utc::now();
        let merged_notes = match (mentorship.notes.clone(), notes) {
            (Some(old), Some(new)) => Some(format!("{old}\n{new}")),
            (old, new) => new.or(old),
        };
        let mut am: MentorshipActive = mentorship.into();
        am.status = Set(MentorshipStatus::Completed);
        am.completed_at = Set(Some(now));
        am.notes = Set(merged_notes);
        am.updated_at = Set(now);
        self.save_mentorship(am).await
    }

    pub async fn save_mentorship(
        &self,
        record: MentorshipActive,
    ) -> Result<MentorshipModel, AppError> {
        Ok(record
            .save(&self.database_connection)
            .await?
            .try_into_model()?)
    }

    /// Idempotent: deleting an id that does not exist is a success.
    pub async fn delete_mentorship(&self, id: Uuid) -> Result<(), AppError> {
        Mentorship::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}
