use crate::api::client::RestApi;
use crate::api::errors::ApiResult;
use crate::api::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::page::Page;
use crate::dto::page::PagedResponseDto;

impl CustomerReader for RestApi {
    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer> {
        self.get_json(&format!("/customers/{id}")).await
    }

    async fn list_customers(&self, query: CustomerListQuery) -> ApiResult<Page<Customer>> {
        let dto: PagedResponseDto<Customer> = self
            .get_json(&format!("/customers?{}", query.to_query_string()))
            .await?;
        Ok(dto.into())
    }
}

impl CustomerWriter for RestApi {
    async fn create_customer(&self, new_customer: &NewCustomer) -> ApiResult<Customer> {
        self.post_json("/customers", new_customer).await
    }

    async fn update_customer(&self, updates: &UpdateCustomer) -> ApiResult<Customer> {
        self.put_json("/customers", updates).await
    }

    async fn deactivate_customer(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/customers/{id}")).await
    }
}
