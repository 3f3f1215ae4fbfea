#[cfg(test)]
mod tests {

    mod naturalize_thing_tests {
        use crate::models::SortAs;
        use crate::services::naturalize::{naturalize, SortConfig};

        fn thing(text: &str) -> String {
            naturalize(text, SortAs::Thing, &SortConfig::default())
        }

        #[test]
        fn test_no_change() {
            assert_eq!(thing("LCD Soundsystem"), "lcd soundsystem");
        }

        #[test]
        fn test_the() {
            assert_eq!(thing("The Long Blondes"), "long blondes, the");
        }

        #[test]
        fn test_a() {
            assert_eq!(thing("A Group Name"), "group name, a");
        }

        #[test]
        fn test_an() {
            assert_eq!(thing("An Actor Prepares"), "actor prepares, an");
        }

        #[test]
        fn test_foreign_article() {
            assert_eq!(thing("Le Tigre"), "tigre, le");
            assert_eq!(thing("Die Ärzte"), "ärzte, die");
        }

        #[test]
        fn test_a_dot() {
            assert_eq!(thing("A. B. Group"), "a. b. group");
        }

        #[test]
        fn test_apostrophe_article() {
            assert_eq!(thing("L'Impératrice"), "impératrice, l'");
            assert_eq!(thing("L’Impératrice"), "impératrice, l’");
        }

        #[test]
        fn test_apostrophe_article_alone() {
            assert_eq!(thing("L'"), "l'");
        }

        #[test]
        fn test_strip() {
            assert_eq!(thing("  Fred  "), "fred");
        }

        #[test]
        fn test_inner_whitespace_collapsed() {
            assert_eq!(thing("The   Band"), "band, the");
        }

        #[test]
        fn test_numbers() {
            assert_eq!(
                thing("Vol. 2 No. 11, November 2004"),
                "vol. 00000002 no. 00000011, november 00002004"
            );
        }

        #[test]
        fn test_la_la() {
            assert_eq!(thing("La La Land"), "la la land");
        }

        #[test]
        fn test_the_the() {
            assert_eq!(thing("The The"), "the the");
        }

        #[test]
        fn test_article_alone() {
            assert_eq!(thing("The"), "the");
        }

        #[test]
        fn test_parentheses() {
            assert_eq!(thing("The Charlatans (1)"), "charlatans, the (00000001)");
        }

        #[test]
        fn test_empty() {
            assert_eq!(thing(""), "");
            assert_eq!(thing("   "), "");
        }

        #[test]
        fn test_html_removed() {
            assert_eq!(thing("The <i>Big</i> Sleep"), "big sleep, the");
        }

        #[test]
        fn test_truncated_at_word_boundary() {
            let title = (0..30)
                .map(|i| (i % 9 + 1).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let expected = format!(
                "{}…",
                (0..28)
                    .map(|i| format!("{:08}", i % 9 + 1))
                    .collect::<Vec<_>>()
                    .join(" ")
            );

            let key = thing(&title);
            assert_eq!(key, expected);
            assert!(key.chars().count() <= 255);
        }

        #[test]
        fn test_custom_articles() {
            let config = SortConfig {
                articles: vec!["il".to_string()],
                ..Default::default()
            };
            assert_eq!(
                naturalize("Il Divo", SortAs::Thing, &config),
                "divo, il"
            );
            assert_eq!(
                naturalize("The Divo", SortAs::Thing, &config),
                "the divo"
            );
        }

        #[test]
        fn test_custom_apostrophe_articles_any_case() {
            let config = SortConfig {
                apostrophe_articles: vec!["L'".to_string()],
                ..Default::default()
            };
            assert_eq!(
                naturalize("L'Impératrice", SortAs::Thing, &config),
                "impératrice, l'"
            );
            assert_eq!(
                naturalize("l'impératrice", SortAs::Thing, &config),
                "impératrice, l'"
            );
        }

        #[test]
        fn test_same_input_same_key() {
            let first = thing("The Fall (2)");
            let second = thing("The Fall (2)");
            assert_eq!(first, second);
        }
    }

    mod naturalize_person_tests {
        use crate::models::SortAs;
        use crate::services::naturalize::{naturalize, SortConfig};

        fn person(text: &str) -> String {
            naturalize(text, SortAs::Person, &SortConfig::default())
        }

        #[test]
        fn test_one_word() {
            assert_eq!(person("Prince"), "prince");
        }

        #[test]
        fn test_two_words() {
            assert_eq!(person("Alice Faye"), "faye, alice");
        }

        #[test]
        fn test_three_words() {
            assert_eq!(person("David Foster Wallace"), "wallace, david foster");
        }

        #[test]
        fn test_suffix() {
            assert_eq!(person("Billy Q Smith Jr"), "smith, billy q jr");
            assert_eq!(person("Sir Fred Bloggs Jr"), "bloggs, sir fred jr");
        }

        #[test]
        fn test_suffix_any_case() {
            assert_eq!(
                person("Martin Luther King JR."),
                "king, martin luther jr."
            );
        }

        #[test]
        fn test_roman_numeral_suffix() {
            assert_eq!(person("Henry Ford II"), "ford, henry ii");
        }

        #[test]
        fn test_suffix_two_words() {
            assert_eq!(person("Bill Jr"), "bill jr");
        }

        #[test]
        fn test_suffix_like_single_name() {
            assert_eq!(person("V"), "v");
        }

        #[test]
        fn test_uppercase_particle() {
            assert_eq!(person("John Le Carré"), "le carré, john");
            assert_eq!(
                person("Ludwig Van Beethoven"),
                "van beethoven, ludwig"
            );
        }

        #[test]
        fn test_lowercase_particle() {
            assert_eq!(person("Daphne du Maurier"), "maurier, daphne du");
        }

        #[test]
        fn test_particle_and_surname_only() {
            assert_eq!(person("Le Corbusier"), "le corbusier");
        }

        #[test]
        fn test_numbers() {
            assert_eq!(person("Bob 7"), "00000007, bob");
        }

        #[test]
        fn test_parentheses() {
            assert_eq!(person("Sam Taylor (1)"), "taylor, sam (00000001)");
        }

        #[test]
        fn test_leading_word_treated_as_forename() {
            assert_eq!(person("The Edge"), "edge, the");
        }
    }

    mod naturalize_numbers_tests {
        use crate::services::naturalize::naturalize_numbers;

        #[test]
        fn test_pads() {
            assert_eq!(naturalize_numbers("2"), "00000002");
            assert_eq!(naturalize_numbers("2004"), "00002004");
        }

        #[test]
        fn test_leading_zeros() {
            assert_eq!(naturalize_numbers("007"), "00000007");
            assert_eq!(naturalize_numbers("0"), "00000000");
        }

        #[test]
        fn test_long_numbers_kept() {
            assert_eq!(naturalize_numbers("1234567890"), "1234567890");
        }

        #[test]
        fn test_numbers_inside_words() {
            assert_eq!(naturalize_numbers("mp3 player"), "mp00000003 player");
        }

        #[test]
        fn test_orders_numerically() {
            let mut keys = vec![
                naturalize_numbers("vol 11"),
                naturalize_numbers("vol 2"),
                naturalize_numbers("vol 100"),
            ];
            keys.sort();
            assert_eq!(
                keys,
                vec!["vol 00000002", "vol 00000011", "vol 00000100"]
            );
        }
    }

    mod sort_as_tests {
        use crate::models::{CreatorKind, SortAs};

        #[test]
        fn test_parse() {
            assert_eq!("person".parse::<SortAs>(), Ok(SortAs::Person));
            assert_eq!("Thing".parse::<SortAs>(), Ok(SortAs::Thing));
            assert!("place".parse::<SortAs>().is_err());
        }

        #[test]
        fn test_creator_kind() {
            assert_eq!(CreatorKind::Individual.sort_as(), SortAs::Person);
            assert_eq!(CreatorKind::Group.sort_as(), SortAs::Thing);
        }
    }

    mod reading_tests {
        use crate::models::{DateGranularity, Reading};
        use chrono::NaiveDate;

        fn date(s: &str) -> NaiveDate {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
        }

        fn reading(start: Option<&str>, end: Option<&str>) -> Reading {
            Reading {
                id: 1,
                publication_id: 1,
                start_date: start.map(date),
                start_granularity: DateGranularity::Day,
                end_date: end.map(date),
                end_granularity: DateGranularity::Day,
                is_finished: false,
                created_at: String::new(),
                updated_at: String::new(),
            }
        }

        #[test]
        fn test_granularity_codes() {
            for granularity in [DateGranularity::Day, DateGranularity::Month, DateGranularity::Year] {
                assert_eq!(DateGranularity::from_code(granularity.code()), Some(granularity));
            }
            assert_eq!(DateGranularity::Month.code(), 4);
            assert_eq!(DateGranularity::from_code(5), None);
            assert_eq!("YEAR".parse::<DateGranularity>(), Ok(DateGranularity::Year));
            assert!("week".parse::<DateGranularity>().is_err());
        }

        #[test]
        fn test_granularity_format() {
            let day = date("2017-09-03");
            assert_eq!(DateGranularity::Day.format(day), "3 Sep 2017");
            assert_eq!(DateGranularity::Month.format(day), "Sep 2017");
            assert_eq!(DateGranularity::Year.format(day), "2017");
        }

        #[test]
        fn test_period() {
            let mut both = reading(Some("2017-02-01"), Some("2017-03-20"));
            both.end_granularity = DateGranularity::Month;
            assert_eq!(both.period(), "1 Feb 2017 to Mar 2017");
            assert!(!both.is_in_progress());

            let started = reading(Some("2017-02-01"), None);
            assert_eq!(started.period(), "started 1 Feb 2017");
            assert!(started.is_in_progress());

            assert_eq!(reading(None, Some("2018-01-05")).period(), "finished 5 Jan 2018");
            assert_eq!(reading(None, None).period(), "");
        }
    }

    mod slug_tests {
        use crate::services::slug::{decode_slug, generate_slug, SlugConfig, SlugError};
        use std::collections::HashSet;

        #[test]
        fn test_default_alphabet_and_slug() {
            let config = SlugConfig::default();
            assert_eq!(generate_slug(123, &config).unwrap(), "9g5o8");
        }

        #[test]
        fn test_same_id_same_slug() {
            let config = SlugConfig::default();
            assert_eq!(
                generate_slug(123, &config).unwrap(),
                generate_slug(123, &config).unwrap()
            );
        }

        #[test]
        fn test_custom_alphabet() {
            let config = SlugConfig {
                alphabet: "ABCDEFG1234567890".to_string(),
                ..Default::default()
            };
            assert_eq!(generate_slug(123, &config).unwrap(), "18G28");
        }

        #[test]
        fn test_custom_salt() {
            let config = SlugConfig {
                salt: "My new salt".to_string(),
                ..Default::default()
            };
            assert_eq!(generate_slug(123, &config).unwrap(), "y9xgy");
        }

        #[test]
        fn test_sequential_ids_differ() {
            let config = SlugConfig::default();
            assert_eq!(generate_slug(1, &config).unwrap(), "wpgz9");
            assert_eq!(generate_slug(2, &config).unwrap(), "z94g9");
        }

        #[test]
        fn test_distinct_and_long_enough() {
            let config = SlugConfig::default();
            let mut seen = HashSet::new();
            for id in 1..=20_000 {
                let slug = generate_slug(id, &config).unwrap();
                assert!(slug.len() >= config.min_length, "{} is too short", slug);
                assert!(seen.insert(slug), "duplicate slug for {}", id);
            }
        }

        #[test]
        fn test_min_length() {
            let config = SlugConfig {
                min_length: 12,
                ..Default::default()
            };
            assert_eq!(generate_slug(1, &config).unwrap(), "m7rwpgz9eb6j");
        }

        #[test]
        fn test_large_id() {
            let config = SlugConfig::default();
            let slug = generate_slug(i64::MAX, &config).unwrap();
            assert_eq!(decode_slug(&slug, &config).unwrap(), Some(i64::MAX));
        }

        #[test]
        fn test_invalid_ids() {
            let config = SlugConfig::default();
            assert_eq!(generate_slug(0, &config), Err(SlugError::InvalidId(0)));
            assert_eq!(generate_slug(-5, &config), Err(SlugError::InvalidId(-5)));
        }

        #[test]
        fn test_invalid_alphabet() {
            let config = SlugConfig {
                alphabet: "abc".to_string(),
                ..Default::default()
            };
            assert!(matches!(
                generate_slug(1, &config),
                Err(SlugError::AlphabetTooShort { found: 3, .. })
            ));
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_decode() {
            let config = SlugConfig::default();
            assert_eq!(decode_slug("9g5o8", &config).unwrap(), Some(123));
            assert_eq!(decode_slug("zzzzz", &config).unwrap(), None);
        }

        #[test]
        fn test_decode_needs_same_salt() {
            let config = SlugConfig {
                salt: "My new salt".to_string(),
                ..Default::default()
            };
            assert_eq!(decode_slug("9g5o8", &config).unwrap(), None);
            assert_eq!(decode_slug("y9xgy", &config).unwrap(), Some(123));
        }
    }

    mod text_slug_tests {
        use crate::services::text_slug::{
            find_unique, slug_candidates, slugify, validate_slug, TextSlugError,
        };

        #[test]
        fn test_slugify() {
            assert_eq!(slugify("The Long Blondes"), "the-long-blondes");
            assert_eq!(slugify("Café au lait"), "cafe-au-lait");
            assert_eq!(slugify("  Hello, World!  "), "hello-world");
        }

        #[test]
        fn test_validate_slug() {
            assert!(validate_slug("the-long-blondes"));
            assert!(!validate_slug(""));
            assert!(!validate_slug("The-Long-Blondes"));
            assert!(!validate_slug(&"a".repeat(201)));
        }

        #[test]
        fn test_candidates() {
            let candidates: Vec<String> = slug_candidates("fred").take(3).collect();
            assert_eq!(candidates, vec!["fred", "fred-2", "fred-3"]);
        }

        #[test]
        fn test_find_unique_free() {
            let slug = find_unique("fred", 10, |_| Ok(false)).unwrap();
            assert_eq!(slug, "fred");
        }

        #[test]
        fn test_find_unique_taken() {
            let taken = ["fred", "fred-2"];
            let slug = find_unique("fred", 10, |candidate| Ok(taken.contains(&candidate))).unwrap();
            assert_eq!(slug, "fred-3");
        }

        #[test]
        fn test_find_unique_exhausted() {
            let mut checked = 0;
            let err = find_unique("fred", 5, |_| {
                checked += 1;
                Ok(true)
            })
            .unwrap_err();
            assert!(matches!(err, TextSlugError::Exhausted { attempts: 5, .. }));
            assert_eq!(checked, 5);
        }

        #[test]
        fn test_find_unique_empty() {
            let err = find_unique("", 5, |_| Ok(false)).unwrap_err();
            assert!(matches!(err, TextSlugError::Empty));
        }

        #[test]
        fn test_find_unique_lookup_error() {
            let err = find_unique("fred", 5, |_| Err(anyhow::anyhow!("database is locked")))
                .unwrap_err();
            assert!(matches!(err, TextSlugError::Lookup(_)));
        }
    }

    mod chart_tests {
        use crate::services::chart::chartify;

        fn scores() -> Vec<(&'static str, i64)> {
            vec![("a", 10), ("b", 8), ("c", 8), ("d", 6), ("e", 0)]
        }

        fn positions<T>(chart: &[crate::services::chart::Charted<T>]) -> Vec<usize> {
            chart.iter().map(|c| c.position).collect()
        }

        #[test]
        fn test_default_list() {
            let chart = chartify(scores(), |s| s.1, Some(0), true);
            assert_eq!(positions(&chart), vec![1, 2, 2, 4]);
        }

        #[test]
        fn test_no_cutoff() {
            let chart = chartify(scores(), |s| s.1, None, true);
            assert_eq!(positions(&chart), vec![1, 2, 2, 4, 5]);
        }

        #[test]
        fn test_cutoff_value() {
            let chart = chartify(scores(), |s| s.1, Some(6), true);
            assert_eq!(positions(&chart), vec![1, 2, 2]);
        }

        #[test]
        fn test_ensure_chartiness() {
            let items = vec![("a", 10), ("b", 10), ("c", 10)];
            assert!(chartify(items.clone(), |s| s.1, Some(0), true).is_empty());
            assert_eq!(chartify(items, |s| s.1, Some(0), false).len(), 3);
        }

        #[test]
        fn test_everything_cut_off() {
            let chart = chartify(vec![("a", 1)], |s| s.1, Some(1), true);
            assert!(chart.is_empty());
        }
    }

    mod config_tests {
        use crate::Config;

        #[test]
        fn test_empty_config_uses_defaults() {
            let config: Config = toml::from_str("").unwrap();
            assert_eq!(config.database.pool_size, 10);
            assert_eq!(config.slugs.min_length, 5);
            assert_eq!(config.slugs.salt, "Django Spectator");
            assert_eq!(config.sorting.max_length, 255);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_partial_sections() {
            let config: Config = toml::from_str(
                r#"
                [slugs]
                salt = "My new salt"

                [sorting]
                particles = ["Von"]
                "#,
            )
            .unwrap();
            assert_eq!(config.slugs.salt, "My new salt");
            assert_eq!(config.slugs.alphabet, "abcdefghijkmnopqrstuvwxyz23456789");
            assert_eq!(config.sorting.particles, vec!["Von"]);
            assert!(config.sorting.articles.contains(&"the".to_string()));
        }

        #[test]
        fn test_invalid_slug_alphabet_rejected() {
            let config: Config = toml::from_str(
                r#"
                [slugs]
                alphabet = "abcdef"
                "#,
            )
            .unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_zero_pool_size_rejected() {
            let config: Config = toml::from_str(
                r#"
                [database]
                path = "test.db"
                pool_size = 0
                "#,
            )
            .unwrap();
            assert!(config.validate().is_err());
        }
    }
}
