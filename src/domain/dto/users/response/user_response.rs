use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 생성/조회/수정/삭제 성공 시 모두 `{ "id": 1, "email": "..." }` 형태로 응답합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email } = user;
        Self { id, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_shape() {
        let response = UserResponse::from(User::new(1, "lyle@gmail.com"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 1, "email": "lyle@gmail.com" }));
    }
}
