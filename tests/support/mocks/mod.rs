// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod directory;
pub mod security;
pub mod time;

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{DummyPasswordHasher, FixedCodeIssuer, SequencedCodeIssuer};

// クライアントディレクトリ
pub use directory::FailingClientDirectory;
