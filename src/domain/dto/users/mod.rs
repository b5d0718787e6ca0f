//! # 사용자 DTO 모듈
//!
//! ```text
//! dto/users/
//! ├── request/   ← EmailRequest (생성/수정 본문), UserIdQuery (?id=)
//! └── response/  ← UserResponse ({id, email})
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
