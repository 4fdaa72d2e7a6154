//! Request Extractors
//!
//! axum 기본 extractor를 감싸서 rejection을 `ApiError`(400 JSON)로 바꾼다.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body (`axum::Json`)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Query string (`axum::extract::Query`)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

/// Path 파라미터 (`axum::extract::Path`)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
