use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::category::UpsertCategoryDto,
    server::{
        error::AppError, model::category::UpsertCategoryParam, service::category::CategoryService,
    },
};


fn param(name: &str) -> UpsertCategoryParam {
    UpsertCategoryParam::from_dto(UpsertCategoryDto {
        name: name.to_string(),
        slug: None,
        icon_url: None,
    })
}
