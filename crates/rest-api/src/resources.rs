//! REST resource representations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use domain::{Page, User};

/// Base path of the user collection.
pub const USERS_PATH: &str = "/api/v1/users";

/// User as exposed over REST. Never carries the password digest.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    /// Canonical link to this user
    #[serde(rename = "self")]
    #[schema(example = "/api/v1/users/08ec89b3-288c-4b38-ba25-b91c81004699")]
    pub self_link: String,
    /// Always `User`
    #[schema(example = "User")]
    pub kind: String,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "John")]
    pub username: String,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            self_link: format!("{}/{}", USERS_PATH, user.id),
            kind: "User".to_string(),
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            username: user.username,
        }
    }
}

/// One page of users plus navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPageResource {
    /// Always `Collection`
    #[schema(example = "Collection")]
    pub kind: String,
    pub content: Vec<UserResource>,
    pub page: PageMetadata,
}

/// Page counters and navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub number: i32,
    pub size: i32,
    pub total_elements: i64,
    pub total_pages: i64,
    #[serde(rename = "self")]
    pub self_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub first: String,
    pub last: String,
}

fn page_link(page: i64, size: i32) -> String {
    format!("{}?page={}&size={}", USERS_PATH, page, size)
}

impl PageMetadata {
    /// Counters and links for `page`.
    ///
    /// `last` never goes below page 0, `prev` is absent on page 0 and `next`
    /// is absent from the last page onwards.
    pub fn of<T>(page: &Page<T>) -> Self {
        let number = i64::from(page.number());
        let size = page.size();
        let total_pages = page.total_pages();
        let last_page = (total_pages - 1).max(0);

        Self {
            number: page.number(),
            size,
            total_elements: page.total_elements(),
            total_pages,
            self_link: page_link(number, size),
            prev: (!page.is_first()).then(|| page_link(number - 1, size)),
            next: (!page.is_last()).then(|| page_link(number + 1, size)),
            first: page_link(0, size),
            last: page_link(last_page, size),
        }
    }
}

impl From<Page<User>> for UserPageResource {
    fn from(page: Page<User>) -> Self {
        let metadata = PageMetadata::of(&page);
        Self {
            kind: "Collection".to_string(),
            content: page.into_content().into_iter().map(UserResource::from).collect(),
            page: metadata,
        }
    }
}

/// Status of one health component.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    #[schema(example = "UP")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthComponents {
    pub db: ComponentHealth,
}

/// Aggregated health report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResource {
    #[schema(example = "UP")]
    pub status: String,
    pub components: HealthComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    pub environment: String,
    pub server_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitInfo {
    pub branch: String,
    pub build_time: String,
    pub build_url: String,
    pub commit_id: String,
}

/// Build and runtime information.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResource {
    pub app: AppInfo,
    pub git: GitInfo,
}
