use super::dto::{
    SocialAccountCreateDto, SocialAccountDetailDto, SocialAccountResponseDto,
    SocialAccountUpdateDto,
};
use super::entity::{SocialAccount, SocialAccountId};
use crud_application::mapper::EntityMapper;
use crud_domain::entity::Entity;
use crud_domain::error::{DomainError, DomainResult};
use crud_domain::lifecycle::Lifecycle;

/// 社交账号与 DTO 之间的映射，平台名称不能为空
#[derive(Debug, Default, Clone, Copy)]
pub struct SocialAccountMapper;

fn require_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::mapping("social account name must not be empty"));
    }
    Ok(())
}

impl EntityMapper for SocialAccountMapper {
    type Entity = SocialAccount;
    type Create = SocialAccountCreateDto;
    type Update = SocialAccountUpdateDto;
    type Response = SocialAccountResponseDto;
    type Detail = SocialAccountDetailDto;

    fn to_entity(
        &self,
        id: SocialAccountId,
        dto: SocialAccountCreateDto,
    ) -> DomainResult<SocialAccount> {
        require_name(&dto.name)?;
        Ok(SocialAccount {
            id,
            lifecycle: Lifecycle::default(),
            name: dto.name,
            user_name: dto.user_name,
            url: dto.url,
            icon: dto.icon,
        })
    }

    fn merge_update(
        &self,
        entity: &mut SocialAccount,
        dto: SocialAccountUpdateDto,
    ) -> DomainResult<()> {
        require_name(&dto.name)?;
        entity.name = dto.name;
        entity.user_name = dto.user_name;
        entity.url = dto.url;
        entity.icon = dto.icon;
        if let Some(active) = dto.is_active {
            entity.lifecycle.set_active(active);
        }
        Ok(())
    }

    fn to_response(&self, entity: &SocialAccount) -> DomainResult<SocialAccountResponseDto> {
        Ok(SocialAccountResponseDto {
            id: entity.id.clone(),
            name: entity.name.clone(),
            user_name: entity.user_name.clone(),
            url: entity.url.clone(),
            icon: entity.icon.clone(),
            is_active: entity.is_active(),
        })
    }

    fn to_detail(&self, entity: &SocialAccount) -> DomainResult<SocialAccountDetailDto> {
        Ok(SocialAccountDetailDto {
            id: entity.id.clone(),
            name: entity.name.clone(),
            user_name: entity.user_name.clone(),
            url: entity.url.clone(),
            icon: entity.icon.clone(),
            is_active: entity.is_active(),
            is_deleted: entity.is_deleted(),
            created_at: entity.lifecycle.created_at(),
            updated_at: entity.lifecycle.updated_at(),
        })
    }
}
