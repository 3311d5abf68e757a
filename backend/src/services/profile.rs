//! Profile service - demographic profile and daily goals

use crate::error::ApiError;
use crate::services::snapshots::SnapshotService;
use fitdash_shared::{Goals, GoalsUpdate, Profile};
use tracing::info;

pub struct ProfileService;

impl ProfileService {
    pub async fn get_profile(
        snapshots: &SnapshotService,
        user_id: &str,
    ) -> Result<Option<Profile>, ApiError> {
        Ok(snapshots.read(user_id).await?.user_profile)
    }

    /// Replace the profile after range checks
    pub async fn set_profile(
        snapshots: &SnapshotService,
        user_id: &str,
        profile: Profile,
    ) -> Result<Profile, ApiError> {
        profile.check()?;

        let profile = snapshots
            .update(user_id, |snapshot| {
                snapshot.user_profile = Some(profile.clone());
                Ok(profile)
            })
            .await?;

        info!(user_id, goal = %profile.goal, diet = %profile.diet_type, "Profile updated");
        Ok(profile)
    }

    pub async fn get_goals(snapshots: &SnapshotService, user_id: &str) -> Result<Goals, ApiError> {
        Ok(snapshots.read(user_id).await?.goals)
    }

    /// Merge a partial update into the current goals
    pub async fn update_goals(
        snapshots: &SnapshotService,
        user_id: &str,
        update: GoalsUpdate,
    ) -> Result<Goals, ApiError> {
        snapshots
            .update(user_id, |snapshot| {
                snapshot.goals.apply(&update)?;
                Ok(snapshot.goals)
            })
            .await
    }
}
