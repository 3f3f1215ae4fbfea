//! Hashids: short, non-sequential looking strings from integers.
//!
//! Follows the published Hashids scheme so that slugs match other
//! implementations given the same salt, alphabet and minimum length.

use super::slug::SlugError;

const SEPARATORS: &str = "cfhistuCFHISTU";
const MIN_ALPHABET_LENGTH: usize = 16;
const GUARD_RATIO: usize = 12;

#[derive(Debug, Clone)]
pub struct Hashids {
    salt: Vec<char>,
    min_length: usize,
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl Hashids {
    pub fn new(salt: &str, min_length: usize, alphabet: &str) -> Result<Self, SlugError> {
        if alphabet.chars().any(char::is_whitespace) {
            return Err(SlugError::AlphabetHasWhitespace);
        }

        let mut unique: Vec<char> = Vec::new();
        for c in alphabet.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.len() < MIN_ALPHABET_LENGTH {
            return Err(SlugError::AlphabetTooShort {
                found: unique.len(),
                required: MIN_ALPHABET_LENGTH,
            });
        }

        let salt: Vec<char> = salt.chars().collect();

        let mut separators: Vec<char> = SEPARATORS.chars().filter(|c| unique.contains(c)).collect();
        let mut alphabet: Vec<char> = unique
            .into_iter()
            .filter(|c| !separators.contains(c))
            .collect();

        reorder(&mut separators, &salt);

        // At least one separator for every 3.5 alphabet characters.
        let min_separators = (alphabet.len() * 2).div_ceil(7);
        if min_separators > separators.len() {
            let missing = min_separators - separators.len();
            separators.extend(alphabet.drain(..missing));
        }

        reorder(&mut alphabet, &salt);

        let num_guards = alphabet.len().div_ceil(GUARD_RATIO);
        let guards: Vec<char> = if alphabet.len() < 3 {
            separators.drain(..num_guards).collect()
        } else {
            alphabet.drain(..num_guards).collect()
        };

        Ok(Self {
            salt,
            min_length,
            alphabet,
            separators,
            guards,
        })
    }

    pub fn encode(&self, numbers: &[u64]) -> String {
        if numbers.is_empty() {
            return String::new();
        }

        let mut alphabet = self.alphabet.clone();
        let values_hash: u64 = numbers
            .iter()
            .enumerate()
            .map(|(i, n)| n % (i as u64 + 100))
            .sum();

        let lottery = alphabet[index_for(values_hash, alphabet.len())];
        let mut encoded = vec![lottery];

        for (i, &number) in numbers.iter().enumerate() {
            let alphabet_salt = self.alphabet_salt(lottery, &alphabet);
            reorder(&mut alphabet, &alphabet_salt);

            let last = hash(number, &alphabet);
            encoded.extend_from_slice(&last);

            if i + 1 < numbers.len() {
                let number = number % (u64::from(last[0]) + i as u64);
                encoded.push(self.separators[index_for(number, self.separators.len())]);
            }
        }

        if encoded.len() < self.min_length {
            let guard = index_for(values_hash + u64::from(encoded[0]), self.guards.len());
            encoded.insert(0, self.guards[guard]);

            if encoded.len() < self.min_length {
                let guard = index_for(values_hash + u64::from(encoded[2]), self.guards.len());
                encoded.push(self.guards[guard]);
            }
        }

        let split_at = alphabet.len() / 2;
        while encoded.len() < self.min_length {
            let alphabet_salt = alphabet.clone();
            reorder(&mut alphabet, &alphabet_salt);

            let mut padded = alphabet[split_at..].to_vec();
            padded.extend_from_slice(&encoded);
            padded.extend_from_slice(&alphabet[..split_at]);
            encoded = padded;

            let excess = encoded.len().saturating_sub(self.min_length);
            if excess > 0 {
                let from = excess / 2;
                encoded = encoded[from..from + self.min_length].to_vec();
            }
        }

        encoded.into_iter().collect()
    }

    /// Returns an empty vector for anything this instance could not have
    /// produced.
    pub fn decode(&self, hashid: &str) -> Vec<u64> {
        let chars: Vec<char> = hashid.chars().collect();
        let parts: Vec<&[char]> = chars.split(|c| self.guards.contains(c)).collect();
        let body = match parts.len() {
            2 | 3 => parts[1],
            _ => parts[0],
        };

        let Some((&lottery, rest)) = body.split_first() else {
            return Vec::new();
        };

        let mut alphabet = self.alphabet.clone();
        let mut numbers = Vec::new();
        for part in rest.split(|c| self.separators.contains(c)) {
            let alphabet_salt = self.alphabet_salt(lottery, &alphabet);
            reorder(&mut alphabet, &alphabet_salt);

            match unhash(part, &alphabet) {
                Some(number) => numbers.push(number),
                None => return Vec::new(),
            }
        }

        if self.encode(&numbers) != hashid {
            return Vec::new();
        }
        numbers
    }

    fn alphabet_salt(&self, lottery: char, alphabet: &[char]) -> Vec<char> {
        std::iter::once(lottery)
            .chain(self.salt.iter().copied())
            .chain(alphabet.iter().copied())
            .take(alphabet.len())
            .collect()
    }
}

fn index_for(value: u64, len: usize) -> usize {
    (value % len as u64) as usize
}

/// Deterministic shuffle of `chars` keyed by `salt`.
fn reorder(chars: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut index = 0;
    let mut sum = 0;
    for i in (1..chars.len()).rev() {
        let integer = salt[index] as usize;
        sum += integer;
        let j = (integer + index + sum) % i;
        chars.swap(i, j);
        index = (index + 1) % salt.len();
    }
}

fn hash(mut number: u64, alphabet: &[char]) -> Vec<char> {
    let len = alphabet.len() as u64;
    let mut hashed = Vec::new();
    loop {
        hashed.push(alphabet[(number % len) as usize]);
        number /= len;
        if number == 0 {
            break;
        }
    }
    hashed.reverse();
    hashed
}

fn unhash(hashed: &[char], alphabet: &[char]) -> Option<u64> {
    if hashed.is_empty() {
        return None;
    }
    let len = alphabet.len() as u64;
    hashed.iter().try_fold(0u64, |number, c| {
        let position = alphabet.iter().position(|a| a == c)? as u64;
        number.checked_mul(len)?.checked_add(position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "abcdefghijkmnopqrstuvwxyz23456789";

    #[test]
    fn test_encode_single() {
        let hashids = Hashids::new("Django Spectator", 5, ALPHABET).unwrap();
        assert_eq!(hashids.encode(&[1]), "wpgz9");
        assert_eq!(hashids.encode(&[123]), "9g5o8");
        assert_eq!(hashids.encode(&[1000000000]), "7xk6kq43");
    }

    #[test]
    fn test_encode_pads_to_min_length() {
        let hashids = Hashids::new("Django Spectator", 12, ALPHABET).unwrap();
        assert_eq!(hashids.encode(&[1]), "m7rwpgz9eb6j");
    }

    #[test]
    fn test_encode_empty() {
        let hashids = Hashids::new("salt", 0, ALPHABET).unwrap();
        assert_eq!(hashids.encode(&[]), "");
    }

    #[test]
    fn test_decode_many() {
        let hashids = Hashids::new("salt", 0, ALPHABET).unwrap();
        let encoded = hashids.encode(&[1, 22, 333]);
        assert_eq!(hashids.decode(&encoded), vec![1, 22, 333]);
    }

    #[test]
    fn test_decode_padded() {
        let hashids = Hashids::new("Django Spectator", 12, ALPHABET).unwrap();
        assert_eq!(hashids.decode("m7rwpgz9eb6j"), vec![1]);
    }

    #[test]
    fn test_decode_rejects_foreign_input() {
        let hashids = Hashids::new("Django Spectator", 5, ALPHABET).unwrap();
        assert!(hashids.decode("").is_empty());
        assert!(hashids.decode("nope!").is_empty());
        assert!(hashids.decode("9g5o9").is_empty());
    }

    #[test]
    fn test_alphabet_too_short() {
        let err = Hashids::new("salt", 0, "abcdefg").unwrap_err();
        assert_eq!(
            err,
            SlugError::AlphabetTooShort {
                found: 7,
                required: 16
            }
        );
    }

    #[test]
    fn test_duplicate_characters_do_not_count() {
        let err = Hashids::new("salt", 0, "aaaabbbbccccddddeeee").unwrap_err();
        assert!(matches!(err, SlugError::AlphabetTooShort { found: 5, .. }));
    }

    #[test]
    fn test_alphabet_with_space() {
        let err = Hashids::new("salt", 0, "abcdefghij klmnopqrstuv").unwrap_err();
        assert_eq!(err, SlugError::AlphabetHasWhitespace);
    }
}
