//! Integration tests for the HTTP-backed api client against a local mock
//! server.

use std::io::Write as _;
use std::time::Duration;

use mockito::Matcher;

use hotel_admin::api::{
    ApiError, CustomerListQuery, CustomerReader, CustomerWriter, HotelRoomListQuery,
    HotelRoomReader, RestApi,
};
use hotel_admin::domain::customer::NewCustomer;

const TIMEOUT: Duration = Duration::from_secs(10);

fn client(server: &mockito::ServerGuard) -> RestApi {
    RestApi::new(&server.url(), TIMEOUT).unwrap()
}

fn customers_body(count: usize, total: usize, page: usize, pages: usize) -> String {
    let data: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":"c-{i}","firstName":"Cliente","lastName":"{i}",
                    "nit":"00000000{i}","phoneNumber":"7000000{i}","active":true}}"#
            )
        })
        .collect();
    format!(
        r#"{{"data":[{}],"totalElements":{total},"pageNumber":{page},
            "totalPages":{pages},"hasNext":true,"hasPrevious":false,
            "isFirst":true,"isLast":false}}"#,
        data.join(",")
    )
}

#[tokio::test]
async fn test_list_customers_sends_filters_and_decodes_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/customers")
        .match_query(Matcher::Exact("firstName=Juan&page=0&size=10".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(customers_body(10, 25, 0, 3))
        .create_async()
        .await;

    let api = client(&server);
    let query = CustomerListQuery::new().first_name("Juan");
    let page = api.list_customers(query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_items, 25);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[tokio::test]
async fn test_list_rooms_uses_api_query_names() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/hotels/rooms")
        .match_query(Matcher::Exact(
            "minCapacity=2&hasTV=true&page=1&size=10".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":[],"totalElements":0,"pageNumber":1,"totalPages":0}"#)
        .create_async()
        .await;

    let api = client(&server);
    let query = HotelRoomListQuery::new()
        .capacity_range(Some(2), None)
        .has_tv(true)
        .paginate(1, 10);
    let page = api.list_hotel_rooms(query).await.unwrap();

    mock.assert_async().await;
    assert!(page.is_empty());
    assert!(!page.has_next);
    assert!(!page.has_previous);
}

#[tokio::test]
async fn test_create_customer_posts_camel_case_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/customers")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"firstName":"Juan","lastName":"Pérez","nit":"123456789",
                "phoneNumber":"71234567"}"#
                .to_string(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"c-1","firstName":"Juan","lastName":"Pérez","nit":"123456789",
                "phoneNumber":"71234567","active":true}"#,
        )
        .create_async()
        .await;

    let api = client(&server);
    let new_customer = NewCustomer::new("  Juan ", "Pérez", "123456789", "71234567");
    let created = api.create_customer(&new_customer).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "c-1");
    assert!(created.active);
}

#[tokio::test]
async fn test_400_preserves_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"detail":"Datos inválidos","errors":{"nit":"NIT duplicado"}}"#;
    server
        .mock("POST", "/customers")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let api = client(&server);
    let new_customer = NewCustomer::new("Juan", "Pérez", "123456789", "71234567");
    let err = api.create_customer(&new_customer).await.unwrap_err();

    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("NIT duplicado"));
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_500_is_an_http_error_too() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers/c-1")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let api = client(&server);
    let err = api.get_customer_by_id("c-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 500, .. }));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers/c-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(|writer| {
            std::thread::sleep(Duration::from_millis(500));
            writer.write_all(b"{}")
        })
        .create_async()
        .await;

    let api = RestApi::new(&server.url(), Duration::from_millis(50)).unwrap();
    let err = api.get_customer_by_id("c-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout));
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let api = RestApi::new("http://127.0.0.1:1", TIMEOUT).unwrap();
    let err = api.get_customer_by_id("c-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers/c-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let api = client(&server);
    let err = api.get_customer_by_id("c-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_deactivate_issues_delete_with_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/customers/c-1")
        .with_status(204)
        .create_async()
        .await;

    let api = client(&server);
    api.deactivate_customer("c-1").await.unwrap();

    mock.assert_async().await;
}
