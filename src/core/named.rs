//! Accessors for well-known state names.

/// Generate an extension trait with `has_*` / `*` accessors for fixed state
/// names on the base layer.
///
/// For every `"Name" => has_fn, get_fn;` entry the trait gets:
/// - `has_fn(&self) -> bool`: the state exists on layer 0
/// - `get_fn(&self) -> &'static str`: `"Name"` if it exists, `""` otherwise
///
/// The trait is implemented for every [`Animator`](crate::core::Animator).
///
/// # Example
///
/// ```
/// use animguard::named_states;
///
/// named_states! {
///     /// Locomotion states shared by every humanoid controller.
///     pub trait LocomotionStates {
///         "Walk" => has_walk_state, walk_state;
///         "Run" => has_run_state, run_state;
///     }
/// }
/// ```
#[macro_export]
macro_rules! named_states {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$fn_meta:meta])*
                $state:literal => $has:ident, $get:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name: $crate::core::Animator {
            $(
                $(#[$fn_meta])*
                fn $has(&self) -> bool {
                    $crate::core::AnimatorExt::has_state(self, $state, $crate::core::BASE_LAYER)
                }

                fn $get(&self) -> &'static str {
                    if self.$has() {
                        $state
                    } else {
                        ""
                    }
                }
            )*
        }

        impl<A: $crate::core::Animator + ?Sized> $name for A {}
    };
}

named_states! {
    /// Talk / Listen / Idle lookups used by dialogue-driven characters.
    pub trait DialogueStates {
        "Talk" => has_talk_state, talk_state;
        "Listen" => has_listen_state, listen_state;
        "Idle" => has_idle_state, idle_state;
    }
}

#[cfg(test)]
mod tests {
    use super::DialogueStates;
    use crate::core::{Animator, NameHash, StateId};

    struct Layered(Vec<&'static str>);

    impl Animator for Layered {
        fn contains_parameter(&self, _hash: NameHash) -> bool {
            false
        }

        fn contains_state(&self, layer: usize, hash: NameHash) -> bool {
            layer == 0 && self.0.iter().any(|s| NameHash::of(s) == hash)
        }

        fn current_state_name(&self, _layer: usize) -> Option<&str> {
            self.0.first().copied()
        }

        fn cross_fade(&mut self, _target: &StateId, _duration: f32, _layer: usize) {}
    }

    #[test]
    fn present_states_return_their_names() {
        let a = Layered(vec!["Idle", "Talk", "Listen"]);
        assert!(a.has_talk_state());
        assert_eq!(a.talk_state(), "Talk");
        assert!(a.has_listen_state());
        assert_eq!(a.listen_state(), "Listen");
        assert!(a.has_idle_state());
        assert_eq!(a.idle_state(), "Idle");
    }

    #[test]
    fn missing_states_return_empty_string() {
        let a = Layered(vec!["Idle"]);
        assert!(!a.has_talk_state());
        assert_eq!(a.talk_state(), "");
        assert!(!a.has_listen_state());
        assert_eq!(a.listen_state(), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let a = Layered(vec!["talk"]);
        assert!(!a.has_talk_state());
    }

    mod custom {
        use crate::core::{Animator, NameHash, StateId};

        named_states! {
            trait CombatStates {
                "Attack" => has_attack_state, attack_state;
            }
        }

        struct Fighter;

        impl Animator for Fighter {
            fn contains_parameter(&self, _hash: NameHash) -> bool {
                false
            }

            fn contains_state(&self, _layer: usize, hash: NameHash) -> bool {
                hash == NameHash::of("Attack")
            }

            fn current_state_name(&self, _layer: usize) -> Option<&str> {
                None
            }

            fn cross_fade(&mut self, _target: &StateId, _duration: f32, _layer: usize) {}
        }

        #[test]
        fn macro_generates_custom_accessors() {
            assert!(Fighter.has_attack_state());
            assert_eq!(Fighter.attack_state(), "Attack");
        }
    }
}
