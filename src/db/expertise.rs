use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::expertise_area::{
    ActiveModel as AreaActive, Entity as ExpertiseArea, Model as AreaModel,
};
use entity::user_expertise_area::{ActiveModel as UserAreaActive, Entity as UserExpertiseArea};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};
use std::collections::HashSet;
use uuid::Uuid;

impl PostgresService {
    pub async fn expertise_area_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(ExpertiseArea::find()
            .filter(entity::expertise_area::Column::Name.eq(name))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn create_expertise_area(&self, name: String) -> Result<Uuid, AppError> {
        if self.expertise_area_exists(&name).await? {
            return Err(AppError::AlreadyExists);
        }
        let id = token::new_id();
        ExpertiseArea::insert(AreaActive {
            id: Set(id),
            name: Set(name),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(id)
    }

    pub async fn get_expertise_area(&self, id: Uuid) -> Result<AreaModel, AppError> {
        Ok(ExpertiseArea::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Expertise area not found".into()))?)
    }

    pub async fn list_expertise_areas(&self) -> Result<Vec<AreaModel>, AppError> {
        Ok(ExpertiseArea::find().all(&self.database_connection).await?)
    }

    pub async fn assign_user_expertise(
        &self,
        user_id: Uuid,
        expertise_area_id: Uuid,
    ) -> Result<(), AppError> {
        // Validate related records so we can send domain errors instead of 500s
        self.get_user_by_id(&user_id).await?;
        self.get_expertise_area(expertise_area_id).await?;

        match UserExpertiseArea::insert(UserAreaActive {
            user_id: Set(user_id),
            expertise_area_id: Set(expertise_area_id),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn list_user_expertise(&self, user_id: Uuid) -> Result<Vec<AreaModel>, AppError> {
        let area_ids: Vec<Uuid> = UserExpertiseArea::find()
            .filter(entity::user_expertise_area::Column::UserId.eq(user_id))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|link| link.expertise_area_id)
            .collect();
        if area_ids.is_empty() {
            return Ok(vec![]);
        }
        Ok(ExpertiseArea::find()
            .filter(entity::expertise_area::Column::Id.is_in(area_ids))
            .all(&self.database_connection)
            .await?)
    }

    /// Expertise both users claim, as a set intersection of their area ids.
    pub async fn shared_expertise(&self, a: Uuid, b: Uuid) -> Result<Vec<AreaModel>, AppError> {
        let a_areas = self.list_user_expertise(a).await?;
        let b_ids: HashSet<Uuid> = self
            .list_user_expertise(b)
            .await?
            .into_iter()
            .map(|area| area.id)
            .collect();
        Ok(a_areas
            .into_iter()
            .filter(|area| b_ids.contains(&area.id))
            .collect())
    }

    pub async fn list_focus_areas(&self, mentorship_id: Uuid) -> Result<Vec<AreaModel>, AppError> {
        let area_ids: Vec<Uuid> = entity::mentorship_focus_area::Entity::find()
            .filter(entity::mentorship_focus_area::Column::MentorshipId.eq(mentorship_id))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|link| link.expertise_area_id)
            .collect();
        if area_ids.is_empty() {
            return Ok(vec![]);
        }
        Ok(ExpertiseArea::find()
            .filter(entity::expertise_area::Column::Id.is_in(area_ids))
            .all(&self.database_connection)
            .await?)
    }
}
