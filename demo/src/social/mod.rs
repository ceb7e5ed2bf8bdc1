mod dto;
mod entity;
mod manager;
mod mapper;

pub use dto::{
    SocialAccountCreateDto, SocialAccountDetailDto, SocialAccountResponseDto,
    SocialAccountUpdateDto,
};
pub use entity::{SocialAccount, SocialAccountId};
pub use manager::SocialAccountManager;
pub use mapper::SocialAccountMapper;
