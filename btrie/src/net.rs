//! Conversions from IP prefix and address types into trie keys.
//!
//! Address bytes are written straight into the key's storage and the
//! logical length is declared afterwards; the key never needs to know
//! anything about IP beyond "network byte order, MSB-first".

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::{Ipv4Net, Ipv6Net};

use crate::bits::BitString;

impl From<Ipv4Net> for BitString<4> {
    fn from(net: Ipv4Net) -> Self {
        let mut key = BitString::new();
        key.as_bytes_mut().copy_from_slice(&net.addr().octets());
        key.set_len(net.prefix_len() as usize);
        key
    }
}

impl From<Ipv6Net> for BitString<16> {
    fn from(net: Ipv6Net) -> Self {
        let mut key = BitString::new();
        key.as_bytes_mut().copy_from_slice(&net.addr().octets());
        key.set_len(net.prefix_len() as usize);
        key
    }
}

impl From<Ipv4Addr> for BitString<4> {
    fn from(addr: Ipv4Addr) -> Self {
        let mut key = BitString::new();
        key.as_bytes_mut().copy_from_slice(&addr.octets());
        key.set_len(BitString::<4>::CAPACITY);
        key
    }
}

impl From<Ipv6Addr> for BitString<16> {
    fn from(addr: Ipv6Addr) -> Self {
        let mut key = BitString::new();
        key.as_bytes_mut().copy_from_slice(&addr.octets());
        key.set_len(BitString::<16>::CAPACITY);
        key
    }
}
