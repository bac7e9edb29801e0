//! Wire-size guards for transactions sent through RPC.
//!
//! RPC nodes reject transactions above the packet limit before simulating
//! them. Checking locally turns a missing address lookup table into a clear
//! error instead of an opaque `-32602` from the node.

use std::any::type_name;

use base64::{prelude::BASE64_STANDARD, Engine};
use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};
use solana_sdk::transaction::VersionedTransaction;
use solana_transaction_status_client_types::{TransactionBinaryEncoding, UiTransactionEncoding};

use crate::error::{ClientError, Result};

/// Maximum over-the-wire size of a transaction: IPv6 minimum MTU (1280)
/// minus the IPv6 header (40) and the fragment header (8).
pub const PACKET_DATA_SIZE: usize = 1280 - 40 - 8;

pub const MAX_BASE58_SIZE: usize = 1683; // bump if PACKET_DATA_SIZE changes
pub const MAX_BASE64_SIZE: usize = 1644; // bump if PACKET_DATA_SIZE changes

pub fn serialize_and_encode<T>(input: &T, encoding: UiTransactionEncoding) -> Result<String>
where
    T: Serialize,
{
    let serialized = bincode::serialize(input)
        .map_err(|e| ClientError::encoding(format!("serialization failed: {e}")))?;
    let encoded = match encoding {
        UiTransactionEncoding::Base58 => bs58::encode(serialized).into_string(),
        UiTransactionEncoding::Base64 => BASE64_STANDARD.encode(serialized),
        _ => {
            return Err(ClientError::encoding(format!(
                "unsupported encoding: {encoding}. Supported encodings: base58, base64"
            )))
        }
    };
    Ok(encoded)
}

pub fn decode_and_deserialize<T>(
    encoded: &str,
    encoding: TransactionBinaryEncoding,
) -> Result<(Vec<u8>, T)>
where
    T: DeserializeOwned,
{
    let wire_output = match encoding {
        TransactionBinaryEncoding::Base58 => {
            if encoded.len() > MAX_BASE58_SIZE {
                return Err(ClientError::encoding(format!(
                    "base58 encoded {} too large: {} bytes (max: encoded/raw {}/{})",
                    type_name::<T>(),
                    encoded.len(),
                    MAX_BASE58_SIZE,
                    PACKET_DATA_SIZE,
                )));
            }
            bs58::decode(encoded)
                .into_vec()
                .map_err(|e| ClientError::encoding(format!("invalid base58 encoding: {e:?}")))?
        }
        TransactionBinaryEncoding::Base64 => {
            if encoded.len() > MAX_BASE64_SIZE {
                return Err(ClientError::encoding(format!(
                    "base64 encoded {} too large: {} bytes (max: encoded/raw {}/{})",
                    type_name::<T>(),
                    encoded.len(),
                    MAX_BASE64_SIZE,
                    PACKET_DATA_SIZE,
                )));
            }
            BASE64_STANDARD
                .decode(encoded)
                .map_err(|e| ClientError::encoding(format!("invalid base64 encoding: {e:?}")))?
        }
    };
    if wire_output.len() > PACKET_DATA_SIZE {
        return Err(ClientError::encoding(format!(
            "decoded {} too large: {} bytes (max: {} bytes)",
            type_name::<T>(),
            wire_output.len(),
            PACKET_DATA_SIZE
        )));
    }
    bincode::options()
        .with_limit(PACKET_DATA_SIZE as u64)
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .deserialize_from(&wire_output[..])
        .map_err(|err| {
            ClientError::encoding(format!(
                "failed to deserialize {}: {}",
                type_name::<T>(),
                err
            ))
        })
        .map(|output| (wire_output, output))
}

/// Serialized size of `tx`, or an error when it would not fit in a packet.
pub fn check_transaction_size(tx: &VersionedTransaction) -> Result<usize> {
    let size = bincode::serialized_size(tx)
        .map_err(|e| ClientError::encoding(format!("serialization failed: {e}")))? as usize;
    if size > PACKET_DATA_SIZE {
        return Err(ClientError::TransactionTooLarge {
            size,
            max: PACKET_DATA_SIZE,
        });
    }
    Ok(size)
}

/// Parse the encoding name accepted by `sendTransaction`.
pub fn parse_binary_encoding(name: &str) -> Result<TransactionBinaryEncoding> {
    match name {
        "base58" => Ok(TransactionBinaryEncoding::Base58),
        "base64" => Ok(TransactionBinaryEncoding::Base64),
        other => Err(ClientError::encoding(format!(
            "unsupported encoding: {other}. Supported encodings: base58, base64"
        ))),
    }
}

/// Decode a transaction in its RPC wire encoding and return it with its
/// serialized size.
pub fn decode_transaction(
    encoded: &str,
    encoding: TransactionBinaryEncoding,
) -> Result<(VersionedTransaction, usize)> {
    let (_, tx) = decode_and_deserialize::<VersionedTransaction>(encoded.trim(), encoding)?;
    let size = check_transaction_size(&tx)?;
    Ok((tx, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{
        hash::Hash,
        instruction::Instruction,
        message::{Message, VersionedMessage},
        pubkey::Pubkey,
        signature::Keypair,
        signer::Signer,
    };

    fn transaction_with_data(len: usize) -> VersionedTransaction {
        let payer = Keypair::new();
        let ix = Instruction::new_with_bytes(Pubkey::new_unique(), &vec![7u8; len], vec![]);
        let msg = Message::new_with_blockhash(&[ix], Some(&payer.pubkey()), &Hash::default());
        VersionedTransaction::try_new(VersionedMessage::Legacy(msg), &[&payer]).unwrap()
    }

    #[test]
    fn base64_transaction_decodes_to_same_bytes() {
        let tx = transaction_with_data(32);
        let encoded = serialize_and_encode(&tx, UiTransactionEncoding::Base64).unwrap();
        let (raw, decoded): (Vec<u8>, VersionedTransaction) =
            decode_and_deserialize(&encoded, TransactionBinaryEncoding::Base64).unwrap();
        assert_eq!(raw, bincode::serialize(&tx).unwrap());
        assert_eq!(decoded, tx);
    }

    #[test]
    fn rejects_unsupported_encoding() {
        let tx = transaction_with_data(1);
        let err = serialize_and_encode(&tx, UiTransactionEncoding::Json).unwrap_err();
        assert!(err.to_string().contains("unsupported encoding"));
    }

    #[test]
    fn rejects_oversized_encoded_input_before_decoding() {
        let encoded = "A".repeat(MAX_BASE64_SIZE + 1);
        let err = decode_and_deserialize::<VersionedTransaction>(&encoded, TransactionBinaryEncoding::Base64)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));

        let encoded = "1".repeat(MAX_BASE58_SIZE + 1);
        assert!(decode_and_deserialize::<VersionedTransaction>(&encoded, TransactionBinaryEncoding::Base58).is_err());
    }

    #[test]
    fn size_check_accepts_small_and_rejects_large_transactions() {
        let small = transaction_with_data(64);
        assert!(check_transaction_size(&small).unwrap() <= PACKET_DATA_SIZE);

        let large = transaction_with_data(PACKET_DATA_SIZE);
        match check_transaction_size(&large) {
            Err(ClientError::TransactionTooLarge { size, max }) => {
                assert!(size > max);
                assert_eq!(max, PACKET_DATA_SIZE);
            }
            other => panic!("expected TransactionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn decodes_base58_transactions_with_their_size() {
        let tx = transaction_with_data(16);
        let encoded = serialize_and_encode(&tx, UiTransactionEncoding::Base58).unwrap();
        let encoding = parse_binary_encoding("base58").unwrap();

        let (decoded, size) = decode_transaction(&format!("{encoded}\n"), encoding).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(size, bincode::serialize(&tx).unwrap().len());
    }

    #[test]
    fn rejects_unknown_encoding_names() {
        assert!(parse_binary_encoding("json").is_err());
    }
}
