//! Admin account endpoints.

use axum::{extract::State, Json};

use super::{require_admin, success, ApiResult};
use crate::models::{AdminProfile, UpdateProfilePicRequest};
use crate::AppState;

/// PUT /api/admin/profile-pic - Record the path of a newly chosen picture.
pub async fn update_profile_pic(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfilePicRequest>,
) -> ApiResult<AdminProfile> {
    require_admin(&state, &request.admin_id).await?;

    let profile = state
        .mutator
        .update_admin_profile_pic(&request.profile_pic)
        .await?;
    success(profile)
}
