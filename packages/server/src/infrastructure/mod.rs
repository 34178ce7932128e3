//! Infrastructure 層
//!
//! ドメイン層が定義する抽象の具体的な実装（インメモリ Repository、
//! アップロード保存先）と、外部とやり取りする DTO を提供します。

pub mod dto;
pub mod repository;
pub mod storage;
