use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::config;

/// Moves `delta` slides from `current`, wrapping both ways.
pub fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta).rem_euclid(len)) as usize
}

pub enum CarouselAction {
    /// Timer tick.
    Advance,
    /// Manual move; restarts the auto-advance timer.
    GoTo(usize),
    /// The slide list changed length.
    Resize(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub current: usize,
    pub len: usize,
    pub restarts: u32,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Advance => Rc::new(CarouselState {
                current: step(self.current, 1, self.len),
                ..(*self).clone()
            }),
            CarouselAction::GoTo(index) => Rc::new(CarouselState {
                current: step(index, 0, self.len),
                restarts: self.restarts.wrapping_add(1),
                ..(*self).clone()
            }),
            CarouselAction::Resize(len) if len == self.len => self,
            CarouselAction::Resize(len) => Rc::new(CarouselState {
                current: self.current.min(len.saturating_sub(1)),
                len,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let len = props.testimonials.len();
    let carousel = use_reducer(|| CarouselState { current: 0, len, restarts: 0 });
    let paused = use_state(|| false);
    let current = carousel.current.min(len.saturating_sub(1));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |len| {
                dispatcher.dispatch(CarouselAction::Resize(*len));
                || ()
            },
            len,
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(paused, _, _)| {
                let interval = (!*paused && len > 1).then(|| {
                    Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Advance);
                    })
                });
                move || drop(interval)
            },
            (*paused, carousel.restarts, len),
        );
    }

    let go_to = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(CarouselAction::GoTo(index)))
    };
    let prev = {
        let go_to = go_to.clone();
        let index = step(current, -1, len);
        Callback::from(move |_: MouseEvent| go_to.emit(index))
    };
    let next = {
        let go_to = go_to.clone();
        let index = step(current, 1, len);
        Callback::from(move |_: MouseEvent| go_to.emit(index))
    };
    let onmouseenter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let onmouseleave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    if len == 0 {
        return html! {};
    }

    html! {
        <section id="testimonialCarousel" class="testimonial-carousel" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <div id="testimonialTrack" class="testimonial-track">
                { for props.testimonials.iter().enumerate().map(|(i, t)| html! {
                    <figure class={classes!("testimonial-slide", (i == current).then(|| "is-active"))}>
                        <blockquote>{&t.quote}</blockquote>
                        <figcaption>
                            <strong>{&t.author}</strong>
                            <span>{&t.role}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <button id="testimonialPrev" class="testimonial-nav" aria-label="Previous testimonial" onclick={prev}>{"‹"}</button>
            <button id="testimonialNext" class="testimonial-nav" aria-label="Next testimonial" onclick={next}>{"›"}</button>
            <div id="testimonialDots" class="testimonial-dots" role="tablist">
                { for (0..len).map(|i| {
                    let go_to = go_to.clone();
                    html! {
                        <button
                            class={classes!("testimonial-dot", (i == current).then(|| "is-active"))}
                            role="tab"
                            aria-selected={(i == current).to_string()}
                            aria-label={format!("Testimonial {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| go_to.emit(i))}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 3, 1)]
    #[case(2, 1, 3, 0)]
    #[case(0, -1, 3, 2)]
    #[case(1, -1, 3, 0)]
    #[case(0, 1, 1, 0)]
    #[case(0, 1, 0, 0)]
    fn wraps_in_both_directions(
        #[case] current: usize,
        #[case] delta: isize,
        #[case] len: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(step(current, delta, len), expected);
    }

    #[test]
    fn timer_tick_does_not_restart_timer() {
        let state = Rc::new(CarouselState { current: 2, len: 3, restarts: 0 });
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(*state, CarouselState { current: 0, len: 3, restarts: 0 });
    }

    #[test]
    fn manual_move_restarts_timer() {
        let state = Rc::new(CarouselState { current: 0, len: 3, restarts: 4 });
        let state = state.reduce(CarouselAction::GoTo(2));
        assert_eq!(*state, CarouselState { current: 2, len: 3, restarts: 5 });
    }

    #[test]
    fn shrinking_list_keeps_slide_in_range() {
        let state = Rc::new(CarouselState { current: 4, len: 5, restarts: 1 });
        let state = state.reduce(CarouselAction::Resize(2));
        assert_eq!(*state, CarouselState { current: 1, len: 2, restarts: 1 });

        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn growing_list_wraps_over_new_length() {
        let state = Rc::new(CarouselState { current: 2, len: 3, restarts: 0 });
        let state = state.reduce(CarouselAction::Resize(5)).reduce(CarouselAction::Advance);
        assert_eq!(*state, CarouselState { current: 3, len: 5, restarts: 0 });
    }

    #[test]
    fn same_length_resize_is_a_no_op() {
        let state = Rc::new(CarouselState { current: 1, len: 3, restarts: 0 });
        let resized = state.clone().reduce(CarouselAction::Resize(3));
        assert!(Rc::ptr_eq(&state, &resized));
    }
}
