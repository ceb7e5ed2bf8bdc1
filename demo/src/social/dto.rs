use super::entity::SocialAccountId;
use chrono::{DateTime, Utc};
use crud_application::dto::{CreateDto, DetailDto, Dto, ResponseDto, UpdateDto};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccountCreateDto {
    pub name: String,
    pub user_name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccountUpdateDto {
    pub id: SocialAccountId,
    pub name: String,
    pub user_name: String,
    pub url: String,
    pub icon: String,
    /// 省略时保持原激活状态
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccountResponseDto {
    pub id: SocialAccountId,
    pub name: String,
    pub user_name: String,
    pub url: String,
    pub icon: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccountDetailDto {
    pub id: SocialAccountId,
    pub name: String,
    pub user_name: String,
    pub url: String,
    pub icon: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dto for SocialAccountCreateDto {}
impl CreateDto for SocialAccountCreateDto {}

impl Dto for SocialAccountUpdateDto {}
impl UpdateDto for SocialAccountUpdateDto {
    type Id = SocialAccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Dto for SocialAccountResponseDto {}
impl ResponseDto for SocialAccountResponseDto {}

impl Dto for SocialAccountDetailDto {}
impl DetailDto for SocialAccountDetailDto {}
