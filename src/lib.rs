pub mod configuration;
pub mod configurationerror;

pub mod math {
    pub mod integrate {
        pub mod quadratureerror;
        pub mod integrand;
        pub mod compositerule;
        pub mod diagnostic;
        pub mod simpson;
        pub mod milne;
        pub mod legendre;
        #[cfg(feature = "parallel")]
        pub mod parallel;
    }

    pub mod differentiate {
        pub mod finitedifference;
    }

    pub mod special {
        pub mod sphericalbessel;
    }

    pub mod geometry {
        pub mod circle;
    }

    pub mod summation;
}

pub mod study {
    pub mod studyerror;
    pub mod integrationstudy;
    pub mod derivativestudy;
    pub mod besselstudy;
    pub mod summationstudy;
    pub mod circlestudy;
}
