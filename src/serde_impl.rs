//! Serde support for key material and partial signatures.
//!
//! Everything serializes through the fixed-width hex layout in
//! [`crate::encoding`], so a JSON blob produced here carries exactly the
//! strings the EVM verifier contracts take as calldata: 64 hex chars per
//! scalar, 128 per G1 point, 256 per G2 point. Deserialization is as
//! strict as the byte decoders underneath; a truncated or off-curve value
//! is a hard error, never a silently wrong key.

use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith::pairing::PairingEngine;
use crate::encoding::{
    g1_from_hex, g1_to_hex, g2_from_hex, g2_to_hex, scalar_from_hex, scalar_to_hex,
};
use crate::tsig::keys::{KeyMaterial, KeyShare, PartialSignature, PublicShare};

impl Serialize for KeyShare<PairingEngine> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("KeyShare", 2)?;
        state.serialize_field("id", &scalar_to_hex(&self.id))?;
        state.serialize_field("secret", &scalar_to_hex(&self.secret))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for KeyShare<PairingEngine> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KeyShareHelper {
            id: String,
            secret: String,
        }

        let helper = KeyShareHelper::deserialize(deserializer)?;
        Ok(KeyShare {
            id: scalar_from_hex(&helper.id).map_err(de::Error::custom)?,
            secret: scalar_from_hex(&helper.secret).map_err(de::Error::custom)?,
        })
    }
}

impl Serialize for PublicShare<PairingEngine> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PublicShare", 2)?;
        state.serialize_field("id", &scalar_to_hex(&self.id))?;
        state.serialize_field("key", &g2_to_hex(&self.key))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for PublicShare<PairingEngine> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct PublicShareHelper {
            id: String,
            key: String,
        }

        let helper = PublicShareHelper::deserialize(deserializer)?;
        Ok(PublicShare {
            id: scalar_from_hex(&helper.id).map_err(de::Error::custom)?,
            key: g2_from_hex(&helper.key).map_err(de::Error::custom)?,
        })
    }
}

impl Serialize for PartialSignature<PairingEngine> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PartialSignature", 2)?;
        state.serialize_field("id", &scalar_to_hex(&self.id))?;
        state.serialize_field("point", &g1_to_hex(&self.point))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for PartialSignature<PairingEngine> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct PartialSignatureHelper {
            id: String,
            point: String,
        }

        let helper = PartialSignatureHelper::deserialize(deserializer)?;
        Ok(PartialSignature {
            id: scalar_from_hex(&helper.id).map_err(de::Error::custom)?,
            point: g1_from_hex(&helper.point).map_err(de::Error::custom)?,
        })
    }
}

impl Serialize for KeyMaterial<PairingEngine> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("KeyMaterial", 3)?;
        state.serialize_field("public_key", &g2_to_hex(&self.public_key))?;
        state.serialize_field("public_shares", &self.public_shares)?;
        state.serialize_field("secret_shares", &self.secret_shares)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for KeyMaterial<PairingEngine> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KeyMaterialHelper {
            public_key: String,
            public_shares: Vec<PublicShare<PairingEngine>>,
            secret_shares: Vec<KeyShare<PairingEngine>>,
        }

        let helper = KeyMaterialHelper::deserialize(deserializer)?;
        Ok(KeyMaterial {
            public_key: g2_from_hex(&helper.public_key).map_err(de::Error::custom)?,
            public_shares: helper.public_shares,
            secret_shares: helper.secret_shares,
        })
    }
}
