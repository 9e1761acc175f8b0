use std::collections::BTreeMap;

use async_trait::async_trait;
use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Entity, Id};

/// 顧客リポジトリ
///
/// 参照系は`&self`、更新系は`&mut self`を取る。
/// 共有する場合は呼び出し側でロックを用意すること。
#[async_trait]
pub trait CustomerRepository {
    /// 全顧客を登録順に取得する
    async fn find_all(&self) -> Vec<Customer>;
    /// 顧客をIDで検索する
    async fn find_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError>;
    /// 新しいIDを採番して顧客を追加する
    async fn add(&mut self, fields: CustomerFields) -> Customer;
    /// 顧客の項目を上書きする
    async fn update(
        &mut self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Customer, CustomerError>;
    /// 顧客を削除する
    async fn delete(&mut self, id: CustomerId) -> Result<(), CustomerError>;
    /// 顧客数
    async fn count(&self) -> usize;
}

/// 顧客ID
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Deref,
)]
pub struct CustomerId(i64);

impl Id for CustomerId {
    type Inner = i64;
}

/// 顧客エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone: String,
    city: String,
}

impl Customer {
    pub fn create(id: CustomerId, fields: CustomerFields) -> Self {
        let CustomerFields {
            name,
            email,
            phone,
            city,
        } = fields;
        Self {
            id,
            name,
            email,
            phone,
            city,
        }
    }

    /// IDは変更しない
    pub fn change(&mut self, fields: CustomerFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.city = fields.city;
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn email(&self) -> &String {
        &self.email
    }

    pub fn phone(&self) -> &String {
        &self.phone
    }

    pub fn city(&self) -> &String {
        &self.city
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const ENTITY_NAME: &'static str = "customer";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// 検証済みの顧客項目
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

/// 作成・更新リクエストの顧客項目
///
/// `id`は受け付けない。未知のキーは無視される。
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

impl CustomerDraft {
    /// 必須項目がすべて揃っているか検証する
    ///
    /// 欠落・`null`・空白のみの値はいずれも未入力として扱う。
    pub fn validate(self) -> Result<CustomerFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = errors.require("name", self.name);
        let email = errors.require("email", self.email);
        let phone = errors.require("phone", self.phone);
        let city = errors.require("city", self.city);
        match (name, email, phone, city) {
            (Some(name), Some(email), Some(phone), Some(city)) => Ok(CustomerFields {
                name,
                email,
                phone,
                city,
            }),
            _ => Err(errors),
        }
    }
}

/// 項目ごとの検証エラー
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    fn require(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                let mut label = field.to_owned();
                label[..1].make_ascii_uppercase();
                self.push(field, format!("The {} field is required.", label));
                None
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Customer with ID {0} not found.")]
    NotFound(CustomerId),
}
