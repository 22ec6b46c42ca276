//! Response decoding.
//!
//! Most records decode structurally through serde, with errors reported at
//! the path of the offending field. `Block` does not: the node sends its
//! integer fields as JSON floats and wraps `prevBlockHash` in a
//! `{"data": ...}` object, so it and its transactions are pulled out of a
//! generic `Value` tree field by field with the bounded-integer helper below.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::{
    AccountInfo, AccountMetadata, AccountMetadataPair, Block, BlockHeight, ChainScore,
    CommunicationTimeStamps, Transaction,
};

const NON_INTEGRAL: &str = "non-integral numeric field";

/// 2^63 and 2^64 are exactly representable as `f64`; the casts below are only
/// taken strictly inside these bounds.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

// ==============================================================================
// Decode Entry Point
// ==============================================================================

/// A record that can be built from a raw node response body.
pub trait Decode: Sized {
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;
}

pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    T::decode(bytes)
}

/// Decode through serde, reporting failures at the path of the offending
/// field (`account.balance`, `data[1].height`). Errors that belong to the
/// payload as a whole are reported against `record`.
fn structural<T: DeserializeOwned>(bytes: &[u8], record: &str) -> Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        let field = if path == "." { record.to_owned() } else { path };
        DecodeError::new(field, e.into_inner().to_string())
    })?;
    de.end().map_err(|e| DecodeError::new(record, e.to_string()))?;
    Ok(value)
}

macro_rules! structural_decode {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
                    structural(bytes, stringify!($ty))
                }
            }
        )*
    };
}

structural_decode!(
    AccountInfo,
    AccountMetadata,
    AccountMetadataPair,
    BlockHeight,
    ChainScore,
    CommunicationTimeStamps,
);

// ==============================================================================
// Single-Field Wrapper
// ==============================================================================

/// The node's `{"data": <value>}` envelope. Used for `prevBlockHash` and for
/// the list endpoints (`/account/harvests`, `/account/mosaic/owned`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    pub data: T,
}

impl<T> Wrapped<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned> Decode for Wrapped<T> {
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        structural(bytes, "data")
    }
}

// ==============================================================================
// Bounded Integers
// ==============================================================================

/// Read an integer that may have been transmitted as a float.
///
/// Integral floats (`37015.0`) are accepted; a fractional part, a non-number,
/// or a value outside `T` is a `DecodeError` naming `field`.
pub fn integral<T>(value: &Value, field: &str) -> Result<T, DecodeError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let Value::Number(n) = value else {
        return Err(DecodeError::wrong_type(field));
    };
    let out_of_range = || DecodeError::new(field, format!("out of range: {n}"));

    if let Some(i) = n.as_i64() {
        return T::try_from(i).map_err(|_| out_of_range());
    }
    if let Some(u) = n.as_u64() {
        return T::try_from(u).map_err(|_| out_of_range());
    }

    let f = n.as_f64().ok_or_else(|| DecodeError::wrong_type(field))?;
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(DecodeError::new(field, NON_INTEGRAL));
    }
    if (-I64_BOUND..I64_BOUND).contains(&f) {
        T::try_from(f as i64).map_err(|_| out_of_range())
    } else if (0.0..U64_BOUND).contains(&f) {
        T::try_from(f as u64).map_err(|_| out_of_range())
    } else {
        Err(out_of_range())
    }
}

/// serde adapter over [`integral`] for structurally decoded records. Only the
/// reason is carried; [`structural`] attaches the field path.
pub(crate) fn deserialize_integral<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + TryFrom<u64>,
{
    let value = Value::deserialize(deserializer)?;
    integral(&value, "").map_err(|e| de::Error::custom(e.reason))
}

/// Treat an explicit `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// Block
// ==============================================================================

impl Decode for Block {
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let tree: Value =
            serde_json::from_slice(bytes).map_err(|e| DecodeError::new("Block", e.to_string()))?;
        block_from_value(tree)
    }
}

pub(crate) fn block_from_value(tree: Value) -> Result<Block, DecodeError> {
    let Value::Object(mut fields) = tree else {
        return Err(DecodeError::wrong_type("Block"));
    };

    let time_stamp = required_integral(&fields, "timeStamp")?;
    let block_type = required_integral(&fields, "type")?;
    let version = required_integral(&fields, "version")?;
    let height: u64 = required_integral(&fields, "height")?;
    if height == 0 {
        return Err(DecodeError::new("height", "must be at least 1"));
    }
    if block_type == Block::NEMESIS_TYPE && height != 1 {
        return Err(DecodeError::new("height", "nemesis block must have height 1"));
    }

    let signature = required_string(&fields, "signature")?;
    let signer = required_string(&fields, "signer")?;

    let prev_block_hash = fields
        .remove("prevBlockHash")
        .ok_or_else(|| DecodeError::missing("prevBlockHash"))?;
    let prev_block_hash: Wrapped<String> = serde_json::from_value(prev_block_hash)
        .map_err(|e| DecodeError::new("prevBlockHash", e.to_string()))?;

    let transactions = match fields.remove("transactions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| transaction_from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(DecodeError::wrong_type("transactions")),
    };

    Ok(Block {
        time_stamp,
        signature,
        prev_block_hash: prev_block_hash.into_inner(),
        block_type,
        transactions,
        version,
        signer,
        height,
    })
}

/// Header fields are typed and removed; whatever remains is the
/// type-specific body. Errors name the field as `transactions[i].<key>`.
fn transaction_from_value(index: usize, tree: Value) -> Result<Transaction, DecodeError> {
    let Value::Object(mut fields) = tree else {
        return Err(DecodeError::wrong_type(&format!("transactions[{index}]")));
    };
    let at = |key: &str| format!("transactions[{index}].{key}");

    let time_stamp = take_integral(&mut fields, "timeStamp", &at("timeStamp"))?;
    let tx_type = take_integral(&mut fields, "type", &at("type"))?;
    let version = take_integral(&mut fields, "version", &at("version"))?;
    let fee = take_integral(&mut fields, "fee", &at("fee"))?;
    let deadline = take_integral(&mut fields, "deadline", &at("deadline"))?;

    let signer = match fields.shift_remove("signer") {
        Some(Value::String(s)) => s,
        None => return Err(DecodeError::missing(&at("signer"))),
        Some(_) => return Err(DecodeError::wrong_type(&at("signer"))),
    };
    let signature = match fields.shift_remove("signature") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => return Err(DecodeError::wrong_type(&at("signature"))),
    };

    Ok(Transaction {
        time_stamp,
        tx_type,
        version,
        signer,
        signature,
        fee,
        deadline,
        body: fields,
    })
}

fn required_integral<T>(fields: &Map<String, Value>, field: &str) -> Result<T, DecodeError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let value = fields.get(field).ok_or_else(|| DecodeError::missing(field))?;
    integral(value, field)
}

fn take_integral<T>(fields: &mut Map<String, Value>, key: &str, name: &str) -> Result<T, DecodeError>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let value = fields.shift_remove(key).ok_or_else(|| DecodeError::missing(name))?;
    integral(&value, name)
}

fn required_string(fields: &Map<String, Value>, field: &str) -> Result<String, DecodeError> {
    match fields.get(field) {
        None => Err(DecodeError::missing(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::wrong_type(field)),
    }
}
