use crate::api::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::page::Page;
use crate::services::{ServiceError, ServiceResult, classify_mutation_error};

/// Fetches one page of customers matching the query.
pub async fn list_customers<A>(api: &A, query: CustomerListQuery) -> ServiceResult<Page<Customer>>
where
    A: CustomerReader + ?Sized,
{
    api.list_customers(query).await.map_err(ServiceError::from)
}

pub async fn get_customer<A>(api: &A, id: &str) -> ServiceResult<Customer>
where
    A: CustomerReader + ?Sized,
{
    api.get_customer_by_id(id).await.map_err(ServiceError::from)
}

/// Registers a new customer, turning a remote 400 into field-level errors.
pub async fn register_customer<A>(api: &A, new_customer: &NewCustomer) -> ServiceResult<Customer>
where
    A: CustomerWriter + ?Sized,
{
    api.create_customer(new_customer)
        .await
        .map_err(classify_mutation_error)
}

/// Saves edits to an existing customer.
pub async fn save_customer<A>(api: &A, updates: &UpdateCustomer) -> ServiceResult<Customer>
where
    A: CustomerWriter + ?Sized,
{
    api.update_customer(updates)
        .await
        .map_err(classify_mutation_error)
}

/// Soft-deletes a customer; the record stays listed with `active == false`.
pub async fn deactivate_customer<A>(api: &A, id: &str) -> ServiceResult<()>
where
    A: CustomerWriter + ?Sized,
{
    api.deactivate_customer(id)
        .await
        .map_err(ServiceError::from)
}
