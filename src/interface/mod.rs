//! Interface layer
//! CLI 입력 파싱과 의존성 조립(composition root)을 담당한다.

pub mod cli;
pub mod composition;
