//! 安装进程级类型解析钩子后，包装类型与原始类型按同一逻辑类型比较。
//! 钩子只能安装一次，因此本文件只包含一个测试。
use ddd_domain::error::DomainError;
use ddd_domain::value_object::{
    IdentityTypeResolver, ProxyNamingConvention, StructuralComparer, install_type_resolver,
};
use std::sync::Arc;

mod shop {
    use ddd_macros::value_object;

    #[value_object]
    pub struct Money {
        pub amount: i64,
    }

    #[value_object]
    pub struct MoneyProxy {
        pub amount: i64,
    }

    pub mod proxies {
        use ddd_macros::value_object;

        #[value_object]
        pub struct Money {
            pub amount: i64,
        }
    }
}

#[test]
fn wrapped_and_plain_instances_share_a_logical_type() {
    install_type_resolver(Arc::new(ProxyNamingConvention::default())).unwrap();

    let comparer = StructuralComparer::shared();
    let plain = shop::Money { amount: 5 };
    let suffixed = shop::MoneyProxy { amount: 5 };
    let nested = shop::proxies::Money { amount: 5 };

    assert!(comparer.equals(&plain, &suffixed));
    assert!(comparer.equals(&plain, &nested));
    assert_eq!(comparer.hash(&plain), comparer.hash(&suffixed));
    assert!(!comparer.equals(&plain, &shop::MoneyProxy { amount: 6 }));
    assert_eq!(comparer.logical_type(&nested), comparer.logical_type(&plain));

    // 生成的运算符同样使用已安装的钩子
    assert_eq!(plain, shop::Money { amount: 5 });

    let again = install_type_resolver(Arc::new(IdentityTypeResolver));
    assert!(matches!(again, Err(DomainError::InvalidState { .. })));
}
