use super::dto::{
    SocialAccountCreateDto, SocialAccountDetailDto, SocialAccountResponseDto,
    SocialAccountUpdateDto,
};
use super::entity::{SocialAccount, SocialAccountId};
use super::mapper::SocialAccountMapper;
use async_trait::async_trait;
use crud_application::{CrudOptions, CrudService, GenericService, ServiceResult};
use crud_domain::repository::{DeletedFilter, Repository};
use crud_domain::specification::{AndSpecification, MatchAll, Specification, spec_fn};
use crud_domain::unit_of_work::UnitOfWork;
use std::sync::Arc;

type Inner = CrudService<SocialAccountMapper, dyn Repository<SocialAccount>, dyn UnitOfWork>;

/// 社交账号管理
///
/// 通用操作委托给 `CrudService`，另提供按平台名称与用户名的查询。
/// 读取类操作默认排除已删除账号，见 [`SocialAccountManager::with_read_filter`]。
#[derive(Clone)]
pub struct SocialAccountManager {
    inner: Inner,
}

impl SocialAccountManager {
    pub fn new(
        repository: Arc<dyn Repository<SocialAccount>>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            inner: CrudService::new(Arc::new(SocialAccountMapper), repository, unit_of_work)
                .with_options(options(DeletedFilter::ExcludeDeleted)),
        }
    }

    /// 调整读取类操作的软删除过滤，例如后台审计时包含已删除账号
    pub fn with_read_filter(self, filter: DeletedFilter) -> Self {
        Self {
            inner: self.inner.with_options(options(filter)),
        }
    }

    /// 按平台名称读取第一个账号
    pub async fn get_by_platform_name(&self, name: &str) -> ServiceResult<SocialAccountResponseDto> {
        self.inner
            .find_one_by(&spec_fn(|a: &SocialAccount| a.name == name))
            .await
    }

    /// 按用户名读取全部账号
    pub async fn get_by_user_name(
        &self,
        user_name: &str,
    ) -> ServiceResult<Vec<SocialAccountResponseDto>> {
        self.inner
            .find_by(&spec_fn(|a: &SocialAccount| a.user_name == user_name))
            .await
    }

    /// 读取属于任一给定平台的账号；未给出平台时结果为空
    pub async fn get_by_platform_names(
        &self,
        names: &[&str],
    ) -> ServiceResult<Vec<SocialAccountResponseDto>> {
        let none: Box<dyn Specification<SocialAccount>> =
            Box::new(Specification::<SocialAccount>::not(MatchAll));
        let spec = names.iter().fold(none, |acc, name| -> Box<dyn Specification<SocialAccount>> {
            let name = name.to_string();
            Box::new(acc.or(spec_fn(move |a: &SocialAccount| a.name == name)))
        });
        self.inner.find_by(&spec).await
    }

    /// 按平台名称与用户名读取单个账号
    pub async fn get_account(
        &self,
        platform: &str,
        user_name: &str,
    ) -> ServiceResult<SocialAccountResponseDto> {
        let platform = platform.to_string();
        let user_name = user_name.to_string();
        let spec: AndSpecification<SocialAccount> =
            spec_fn(move |a: &SocialAccount| a.name == platform)
                .and(spec_fn(move |a: &SocialAccount| a.user_name == user_name));
        self.inner.find_one_by(&spec).await
    }
}

fn options(read_filter: DeletedFilter) -> CrudOptions {
    CrudOptions::builder()
        .entity_name("social_account")
        .read_filter(read_filter)
        .build()
}

#[async_trait]
impl
    GenericService<
        SocialAccount,
        SocialAccountResponseDto,
        SocialAccountCreateDto,
        SocialAccountUpdateDto,
        SocialAccountDetailDto,
    > for SocialAccountManager
{
    async fn add(&self, dto: SocialAccountCreateDto) -> ServiceResult<SocialAccountResponseDto> {
        self.inner.add(dto).await
    }

    async fn update(&self, dto: SocialAccountUpdateDto) -> ServiceResult {
        self.inner.update(dto).await
    }

    async fn remove(&self, id: &SocialAccountId) -> ServiceResult {
        self.inner.remove(id).await
    }

    async fn get_by_id(&self, id: &SocialAccountId) -> ServiceResult<SocialAccountResponseDto> {
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self) -> ServiceResult<Vec<SocialAccountResponseDto>> {
        self.inner.get_all().await
    }

    async fn get_detail_by_id(&self, id: &SocialAccountId) -> ServiceResult<SocialAccountDetailDto> {
        self.inner.get_detail_by_id(id).await
    }
}
