use crud_macros::{entity, entity_id};
use uuid::Uuid;

#[entity_id]
pub struct SocialAccountId(Uuid);

/// 社交平台账号
#[entity(id = SocialAccountId)]
pub struct SocialAccount {
    /// 平台名称，如 "github"
    pub name: String,
    pub user_name: String,
    pub url: String,
    pub icon: String,
}
